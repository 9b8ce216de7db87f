use nix::errno::Errno;
use thiserror::Error;


#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error{
    #[error("requested size {0} is not positive")]
    InvalidSize(usize),
    #[error("index {index} is outside 0..{length}")]
    IndexOutOfRange{
        index: usize,
        length: usize,
    },
    #[error("copy of {requested} elements exceeds the {available} available")]
    RangeOverflow{
        requested: usize,
        available: usize,
    },
    #[error("array storage is absent")]
    NullReference,
    #[error("call to {call} failed: {errno}")]
    AllocationFailure{
        call: &'static str,
        #[source]
        errno: Errno,
    },
}
