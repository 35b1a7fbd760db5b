use thiserror::Error;

/// Authorization errors for bot commands
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("You don't have the required permissions to use this command.")]
    AdminRequired,

    #[error("This command can only be used in a server.")]
    ServerRequired,
}
