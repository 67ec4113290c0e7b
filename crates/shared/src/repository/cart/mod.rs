mod command;
mod query;

pub use self::command::CartCommandRepository;
pub use self::query::CartQueryRepository;
