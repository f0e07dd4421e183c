use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    /// Cards were added to or removed from the container.
    CardsChanged,
    /// A filter pass changed which cards are displayed.
    VisibilityChanged,
    /// Every image created by the last manifest load finished or failed.
    ImagesSettled,
}

pub type GalleryHook = Rc<dyn Fn(GalleryEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct EventBus {
    hooks: RefCell<Vec<(SubscriptionId, GalleryHook)>>,
    next_id: Cell<u64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, hook: GalleryHook) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get().saturating_add(1));
        self.hooks.borrow_mut().push((id, hook));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    }

    pub fn emit(&self, event: GalleryEvent) {
        let hooks: Vec<GalleryHook> = self
            .hooks
            .borrow()
            .iter()
            .map(|(_, hook)| hook.clone())
            .collect();
        for hook in hooks {
            hook(event);
        }
    }
}
