//! Toast-backed shopper notifications.

use cart_core::{CartConfig, Notifier};
use leptos_toast::Toast;

pub struct ToastNotifier {
    toast: Toast,
}

impl ToastNotifier {
    pub fn new(config: &CartConfig) -> Self {
        Self {
            toast: Toast::new(config.selectors.message_class.clone(), config.notification_ms),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        self.toast.show(message);
    }
}
