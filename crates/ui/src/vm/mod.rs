mod question_vm;
mod result_vm;
mod time_fmt;

pub use question_vm::{QuestionIntent, QuestionPageVm};
pub use result_vm::{ResultRowVm, ResultVm, map_result};
