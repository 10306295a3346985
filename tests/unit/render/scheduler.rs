use super::*;

#[test]
fn new_scheduler_is_idle() {
    let s = RedrawScheduler::default();
    assert!(s.is_idle());
    assert!(s.pending().is_empty());
}

#[test]
fn repeated_marks_coalesce() {
    let mut s = RedrawScheduler::default();
    s.mark_layer(Layer::Text);
    s.mark_layer(Layer::Text);
    s.mark(Layer::Icon.into());
    let (dirty, compose) = s.take();
    assert_eq!(dirty.len(), 2);
    assert!(dirty.contains(Layer::Text) && dirty.contains(Layer::Icon));
    assert!(compose);
    assert!(s.is_idle());
}

#[test]
fn empty_mark_does_not_schedule_compose() {
    let mut s = RedrawScheduler::default();
    s.mark(LayerSet::EMPTY);
    assert!(s.is_idle());
}

#[test]
fn compose_only() {
    let mut s = RedrawScheduler::default();
    s.mark_compose();
    assert!(!s.is_idle());
    assert_eq!(s.take(), (LayerSet::EMPTY, true));
}

#[test]
fn all_dirty_covers_every_layer() {
    let mut s = RedrawScheduler::all_dirty();
    let (dirty, compose) = s.take();
    assert_eq!(dirty, LayerSet::ALL);
    assert!(compose);
}

#[test]
fn flush_report_noop() {
    assert!(FlushReport::default().is_noop());
    assert!(
        !FlushReport {
            redrawn: LayerSet::EMPTY,
            composited: true
        }
        .is_noop()
    );
}
