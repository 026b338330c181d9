//! Error types for value operations

use thiserror::Error;

/// The structural change a rejected mutation attempted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Adding a slot beyond the current length
    Add,
    /// Overwriting an existing slot
    Set,
    /// Removing a slot
    Delete,
}

/// Errors raised by array and string operations
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueError {
    /// A numeric or structural precondition was violated
    #[error("RangeError: {0}")]
    InvalidArgument(String),

    /// `reduce`/`reduceRight` without a seed on an empty array
    #[error("TypeError: Reduce of empty array with no initial value")]
    EmptyReduce,

    /// A structural change was attempted on a frozen instance
    #[error("TypeError: {}", mutation_message(*kind, *index, class))]
    MutationRejected {
        /// What the mutator tried to do
        kind: MutationKind,
        /// The slot it tried to touch
        index: usize,
        /// Class name of the receiver (e.g. `Array`)
        class: &'static str,
    },
}

fn mutation_message(kind: MutationKind, index: usize, class: &str) -> String {
    match kind {
        MutationKind::Add => {
            format!("Cannot add property '{index}', object is not extensible")
        }
        MutationKind::Set => {
            format!("Cannot set property '{index}' of [object {class}]")
        }
        MutationKind::Delete => {
            format!("Cannot delete property '{index}' of [object {class}]")
        }
    }
}

impl ValueError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a mutation rejection for a frozen receiver
    pub fn mutation_rejected(kind: MutationKind, index: usize, class: &'static str) -> Self {
        Self::MutationRejected { kind, index, class }
    }

    /// The attempted mutation, if this is a [`ValueError::MutationRejected`]
    pub fn mutation(&self) -> Option<(MutationKind, usize)> {
        match self {
            Self::MutationRejected { kind, index, .. } => Some((*kind, *index)),
            _ => None,
        }
    }
}

/// Result type for value operations
pub type ValueResult<T> = std::result::Result<T, ValueError>;
