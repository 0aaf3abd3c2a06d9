use super::Scroll;

#[test]
fn it_does_not_scroll_short_lists() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 20);
    scroll.down();

    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_to_last_page() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 20);
    scroll.down_page();
    scroll.down_page();

    assert_eq!(scroll.position, 10);

    scroll.up();
    assert_eq!(scroll.position, 9);
}

#[test]
fn it_clamps_when_list_shrinks() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 20);
    scroll.down_page();
    scroll.set_state(22, 20);

    assert_eq!(scroll.position, 2);

    scroll.first();
    assert_eq!(scroll.position, 0);
}
