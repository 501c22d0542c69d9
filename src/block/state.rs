use crate::fragment::Adventure;

/// What a block should display after a load pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No content reference was authored on the block.
    NoSelection,
    /// Every referenced fragment failed to load or does not exist.
    NotFound,
    /// At least one fragment loaded; failures were dropped.
    Ready(Vec<Adventure>),
}

impl ViewState {
    pub fn fragments(&self) -> &[Adventure] {
        match self {
            ViewState::Ready(fragments) => fragments,
            _ => &[],
        }
    }
}
