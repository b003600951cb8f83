use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.success("A", "a");
    let second = state.error("B", "b");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.success("A", "a");
    let second = state.success("B", "b");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.success("A", "a");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn kinds_recorded_per_toast() {
    let mut state = ToastState::default();
    state.success("A", "a");
    state.error("B", "b");
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}
