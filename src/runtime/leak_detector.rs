use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy)]
pub struct LeakStats {
    pub objects: usize,
    pub classes: usize,
    pub methods: usize,
}

static OBJECTS: AtomicUsize = AtomicUsize::new(0);
static CLASSES: AtomicUsize = AtomicUsize::new(0);
static METHODS: AtomicUsize = AtomicUsize::new(0);

pub fn record_object() {
    OBJECTS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_class() {
    CLASSES.fetch_add(1, Ordering::Relaxed);
}

pub fn record_method() {
    METHODS.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> LeakStats {
    LeakStats {
        objects: OBJECTS.load(Ordering::Relaxed),
        classes: CLASSES.load(Ordering::Relaxed),
        methods: METHODS.load(Ordering::Relaxed),
    }
}
