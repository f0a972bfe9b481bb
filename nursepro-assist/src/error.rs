use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssistError {
    #[error("image is {size} bytes, limit is {limit} bytes")]
    ImageTooLarge { size: usize, limit: usize },

    #[error("unsupported image type: {0}")]
    UnsupportedMime(String),

    #[error("image is empty")]
    EmptyImage,

    #[error("answer index {choice} out of range for {options} options")]
    ChoiceOutOfRange { choice: usize, options: usize },

    #[error("question already answered")]
    AlreadyAnswered,

    #[error("quiz has no remaining questions")]
    QuizFinished,
}
