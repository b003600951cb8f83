use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active("/admin/services", "/admin/services"));
}

#[test]
fn dashboard_not_active_on_sub_routes() {
    assert!(!is_active("/admin/services", "/admin"));
}

#[test]
fn nav_items_cover_all_admin_routes() {
    let paths: Vec<&str> = NAV_ITEMS.iter().map(|(_, path)| *path).collect();
    assert_eq!(
        paths,
        ["/admin", "/admin/services", "/admin/bookings", "/admin/users"]
    );
}
