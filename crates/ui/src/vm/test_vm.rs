use quiz_core::model::{TestId, TestSummary};

/// UI-ready row for the tests list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCardVm {
    pub id: TestId,
    pub title: String,
}

impl From<&TestSummary> for TestCardVm {
    fn from(summary: &TestSummary) -> Self {
        let title = summary.title.trim();
        let title = if title.is_empty() {
            format!("Test {}", summary.id)
        } else {
            title.to_owned()
        };
        Self {
            id: summary.id,
            title,
        }
    }
}

#[must_use]
pub fn map_test_cards(tests: &[TestSummary]) -> Vec<TestCardVm> {
    tests.iter().map(TestCardVm::from).collect()
}
