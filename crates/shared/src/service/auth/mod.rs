mod identity;
mod login;
mod register;
mod token;

pub use self::identity::IdentityService;
pub use self::login::LoginService;
pub use self::register::RegisterService;
pub use self::token::TokenService;
