use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;

const NOTICE_TTL_MS: u32 = 6_000;

pub(crate) type NoticeSubscriber = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub(crate) fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Error => "notice-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Transient banner queue. Notices expire on their own; failed requests
/// surface here once and are never retried behind the user's back.
#[derive(Clone)]
pub(crate) struct NoticeHub {
    inner: Rc<NoticeInner>,
}

struct NoticeInner {
    notices: RefCell<Vec<Notice>>,
    subscribers: RefCell<Vec<NoticeSubscriber>>,
    next_id: Cell<u64>,
}

impl NoticeHub {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(NoticeInner {
                notices: RefCell::new(Vec::new()),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
            }),
        }
    }

    pub(crate) fn push(&self, level: NoticeLevel, text: impl Into<String>) {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.notices.borrow_mut().push(Notice {
            id,
            level,
            text: text.into(),
        });
        notify_subscribers(&self.inner);

        let inner = Rc::clone(&self.inner);
        Timeout::new(NOTICE_TTL_MS, move || {
            remove_notice(&inner, id);
        })
        .forget();
    }

    pub(crate) fn dismiss(&self, id: u64) {
        remove_notice(&self.inner, id);
    }

    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.inner.notices.borrow().clone()
    }

    pub(crate) fn subscribe(&self, subscriber: NoticeSubscriber) -> NoticeSubscription {
        self.inner.subscribers.borrow_mut().push(subscriber.clone());
        NoticeSubscription {
            subscriber,
            inner: Rc::clone(&self.inner),
        }
    }
}

pub(crate) struct NoticeSubscription {
    subscriber: NoticeSubscriber,
    inner: Rc<NoticeInner>,
}

impl Drop for NoticeSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

fn remove_notice(inner: &Rc<NoticeInner>, id: u64) {
    let removed = {
        let mut notices = inner.notices.borrow_mut();
        let before = notices.len();
        notices.retain(|notice| notice.id != id);
        notices.len() != before
    };
    if removed {
        notify_subscribers(inner);
    }
}

fn notify_subscribers(inner: &Rc<NoticeInner>) {
    let subscribers = inner.subscribers.borrow().clone();
    for subscriber in subscribers {
        (subscriber)();
    }
}
