use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("{name} is not an accepted file type")]
    InvalidFileType { name: String },
    #[error("{name} is {size} bytes, the limit is {max} bytes")]
    FileTooLarge { name: String, size: u64, max: u64 },
    #[error("an upload for {slot_id} is already in progress")]
    UploadInFlight { slot_id: String },
    #[error("{slot_id} is already verified")]
    SlotVerified { slot_id: String },
    #[error("upload service unavailable: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProposalError {
    #[error("Cannot remove the last item")]
    RemoveOnLastItem,
    #[error("no land item at position {0}")]
    NoSuchItem(usize),
    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field}: '{value}' is not a known option")]
    UnknownOption { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
