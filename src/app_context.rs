use std::rc::Rc;

use yew::Properties;

use crate::api::ApiClient;
use crate::notify::NoticeHub;

/// Shared services handed down the component tree explicitly. Components
/// receive this through props; nothing reads it from a global.
pub(crate) struct AppContext {
    pub api: ApiClient,
    pub notices: NoticeHub,
}

impl AppContext {
    pub(crate) fn new() -> Self {
        Self {
            api: ApiClient::from_env(),
            notices: NoticeHub::new(),
        }
    }
}

#[derive(Properties)]
pub(crate) struct ContextProps {
    pub context: Rc<AppContext>,
}

impl PartialEq for ContextProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.context, &other.context)
    }
}
