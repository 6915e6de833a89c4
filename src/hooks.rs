//! Host integration hooks
//!
//! Invoice creation, file upload, and invoice navigation belong to whatever
//! system embeds this dashboard. The hooks are opaque callbacks invoked on
//! the matching state transitions; when unset, the transitions still update
//! the UI but nothing else happens.

/// Callbacks a host application can supply
#[derive(Default)]
pub struct Hooks {
    /// Invoked when the create-invoice flow starts
    pub on_create: Option<Box<dyn FnMut()>>,
    /// Invoked when the upload flow starts
    pub on_upload: Option<Box<dyn FnMut()>>,
    /// Invoked with the invoice id when a row is activated
    pub on_activate: Option<Box<dyn FnMut(&str)>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire_create(&mut self) {
        if let Some(hook) = self.on_create.as_mut() {
            hook();
        }
    }

    pub fn fire_upload(&mut self) {
        if let Some(hook) = self.on_upload.as_mut() {
            hook();
        }
    }

    pub fn fire_activate(&mut self, invoice_id: &str) {
        if let Some(hook) = self.on_activate.as_mut() {
            hook(invoice_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unset_hooks_are_noops() {
        let mut hooks = Hooks::new();
        hooks.fire_create();
        hooks.fire_upload();
        hooks.fire_activate("INV-1042");
    }

    #[test]
    fn test_activate_hook_receives_invoice_id() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut hooks = Hooks::new();
        hooks.on_activate = Some(Box::new(move |id| {
            sink.borrow_mut().push(id.to_string());
        }));

        hooks.fire_activate("INV-1040");
        hooks.fire_activate("INV-1035");
        assert_eq!(*seen.borrow(), vec!["INV-1040", "INV-1035"]);
    }
}
