mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;
