mod support;

use pretty_assertions::assert_eq;
use support::{focus_tag, Recorder};
use tape_layout::{
    shared, Focusable, Group, Layout, Model, Msg, Renderable, Sizeable, StatusBar, Style, Text,
};

fn ring(names: &[&'static str]) -> (Group, Vec<tape_layout::Shared<Recorder>>) {
    let recorders: Vec<_> = names.iter().map(|name| Recorder::shared(*name)).collect();
    let mut builder = Group::builder();
    for recorder in recorders.iter() {
        builder = builder.item(recorder.clone());
    }
    (builder.build().expect("valid group"), recorders)
}

#[test]
fn three_focus_next_events_cycle_back_to_the_start() {
    let (mut group, recorders) = ring(&["input", "table", "viewport"]);
    assert_eq!(focus_tag(group.init()), Some("input"));

    let mut indices = vec![group.focus_index()];
    let mut tags = Vec::new();
    for _ in 0..3 {
        tags.push(focus_tag(group.update(&Msg::key("tab"))));
        indices.push(group.focus_index());
    }

    assert_eq!(indices, vec![0, 1, 2, 0]);
    assert_eq!(tags, vec![Some("table"), Some("viewport"), Some("input")]);
    assert_eq!(recorders[0].borrow().focus_calls, 2);
    assert_eq!(recorders[1].borrow().focus_calls, 1);
    assert_eq!(recorders[2].borrow().focus_calls, 1);
}

#[test]
fn k_steps_from_any_start_land_on_start_plus_k() {
    for start in 0..4 {
        for steps in 0..9 {
            let (mut group, recorders) = ring(&["a", "b", "c", "d"]);
            group.init();
            group.set_focus_index(start).expect("in range");
            for _ in 0..steps {
                group.update(&Msg::key("tab"));
            }

            assert_eq!(group.focus_index(), (start + steps) % 4);
            let focused = recorders.iter().filter(|p| p.borrow().is_focused()).count();
            assert_eq!(focused, 1);
        }
    }
}

#[test]
fn next_then_prev_is_a_round_trip() {
    let (mut group, _) = ring(&["a", "b", "c"]);
    group.init();
    for start in 0..3 {
        group.set_focus_index(start).expect("in range");
        group.update(&Msg::key("tab"));
        group.update(&Msg::key("shift+tab"));
        assert_eq!(group.focus_index(), start);
    }
}

#[test]
fn blur_never_moves_the_index() {
    let (mut group, recorders) = ring(&["a", "b"]);
    group.init();
    group.focus_next();
    group.blur();
    group.blur();

    assert_eq!(group.focus_index(), 1);
    assert!(recorders[1].borrow().is_focused());
    assert!(!group.is_focused());
}

#[test]
fn messages_are_broadcast_to_every_item() {
    let (mut group, recorders) = ring(&["a", "b"]);
    group.init();

    group.update(&Msg::Resize {
        columns: 80,
        rows: 24,
    });
    group.update(&Msg::custom(7u8));
    group.update(&Msg::key("enter"));

    for recorder in recorders.iter() {
        assert_eq!(
            *recorder.borrow().received.borrow(),
            vec!["resize 80x24", "custom", "enter"]
        );
    }
}

#[test]
fn group_with_header_and_status_bar_fills_the_terminal() {
    let header = shared(Text::new("Title"));
    let status = shared(StatusBar::new("NORMAL", "ok").with_style(Style::new()));
    let list = Recorder::shared("list");
    let detail = Recorder::shared("detail");

    let mut layout = Layout::new();
    layout.push(header.clone());
    layout.push(list.clone());
    layout.push(detail.clone());
    layout.push(status.clone());

    let mut group = Group::builder()
        .item(list.clone())
        .item(detail.clone())
        .layout(layout)
        .build()
        .expect("valid group");
    group.init();
    group.set_size(20, 12);

    assert_eq!(list.borrow().height(), 5);
    assert_eq!(detail.borrow().height(), 5);
    assert_eq!(status.borrow().width(), 20);
    assert_eq!((group.width(), group.height()), (20, 12));

    let view = group.view();
    let lines: Vec<&str> = view.split('\n').collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0].trim_end(), "Title");
    assert_eq!(lines[1].trim_end(), ">list");
    assert_eq!(lines[2].trim_end(), " detail");
    assert_eq!(lines[3].trim_end(), "NORMAL            ok");
}
