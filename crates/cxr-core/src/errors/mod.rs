mod cxr_error;

pub use cxr_error::{CxrError, CxrResult};
