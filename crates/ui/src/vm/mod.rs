mod question_vm;
mod result_vm;
mod test_vm;

pub use question_vm::{OptionVm, QuestionCardVm, map_question_cards};
pub use result_vm::{ResultVm, map_result};
pub use test_vm::{TestCardVm, map_test_cards};
