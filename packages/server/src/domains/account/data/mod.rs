mod account;

pub use account::{
    AccountData, CreateSessionInput, CreateUserInput, SessionData, UpdateUserInput,
};
