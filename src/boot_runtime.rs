use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootState {
    ColdStart,
    LoadingStorage,
    Ready,
}

thread_local! {
    static BOOT_STATE: RefCell<BootState> = RefCell::new(BootState::ColdStart);
    static BOOT_HOOKS: RefCell<Vec<Rc<dyn Fn()>>> = RefCell::new(Vec::new());
}

pub(crate) fn boot_state() -> BootState {
    BOOT_STATE.with(|state| *state.borrow())
}

pub(crate) fn set_boot_state(next: BootState) {
    let hooks = BOOT_STATE.with(|state| {
        let mut state = state.borrow_mut();
        if *state == next {
            return Vec::new();
        }
        *state = next;
        BOOT_HOOKS.with(|hooks| hooks.borrow().clone())
    });
    for hook in hooks {
        hook();
    }
}

/// Runs `hook` on every boot transition until the returned watch is
/// dropped.
pub(crate) fn watch_boot_state(hook: Rc<dyn Fn()>) -> BootWatch {
    BOOT_HOOKS.with(|hooks| hooks.borrow_mut().push(hook.clone()));
    BootWatch { hook }
}

pub(crate) struct BootWatch {
    hook: Rc<dyn Fn()>,
}

impl Drop for BootWatch {
    fn drop(&mut self) {
        BOOT_HOOKS.with(|hooks| {
            hooks
                .borrow_mut()
                .retain(|item| !Rc::ptr_eq(item, &self.hook));
        });
    }
}
