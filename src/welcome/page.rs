//! What the host does in response to the page's load lifecycle

use crate::common::launch::Launcher;

use super::dispatch::{Dispatcher, Outcome};

/// Load events the host reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Started,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    Nothing,
    /// Run these scripts in the page
    Push(Vec<String>),
    Quit,
}

/// A finished load gets the current state; a started load is checked for a
/// `cmd://` URI and routed through the dispatcher.
pub fn on_load<L: Launcher>(
    dispatcher: &mut Dispatcher<L>,
    stage: LoadStage,
    uri: Option<&str>,
) -> PageAction {
    match stage {
        LoadStage::Finished => PageAction::Push(dispatcher.page_state().scripts()),
        LoadStage::Started => match uri.and_then(|uri| dispatcher.handle_uri(uri)) {
            Some(Outcome::Quit) => PageAction::Quit,
            Some(Outcome::Refresh) => PageAction::Push(dispatcher.page_state().scripts()),
            Some(Outcome::Continue) | None => PageAction::Nothing,
        },
    }
}
