use inplot_transport::{ChildMessage, LineReceiver, LineSender, ParentMessage};
use std::io::Cursor;

#[test]
fn parent_messages_round_trip() {
    let mut wire = Vec::new();
    {
        let mut sender = LineSender::new(&mut wire);
        sender.send(&ParentMessage::Focus).expect("send focus");
        sender
            .send(&ParentMessage::Data {
                samples: vec![1.0, -2.5, 3.25],
            })
            .expect("send data");
    }

    let mut receiver = LineReceiver::<_, ParentMessage>::new(Cursor::new(wire));
    assert!(matches!(
        receiver.recv().expect("recv"),
        Some(ParentMessage::Focus)
    ));
    match receiver.recv().expect("recv") {
        Some(ParentMessage::Data { samples }) => assert_eq!(samples, vec![1.0, -2.5, 3.25]),
        other => panic!("expected data message, got {other:?}"),
    }
    assert!(receiver.recv().expect("recv").is_none());
}

#[test]
fn unrecognized_lines_are_skipped() {
    let wire = concat!(
        "{\"type\":\"reticulate\"}\n",
        "not json at all\n",
        "\n",
        "{\"type\":\"focus\"}\n",
    );
    let mut receiver = LineReceiver::<_, ParentMessage>::new(Cursor::new(wire.as_bytes()));
    assert!(matches!(
        receiver.recv().expect("recv"),
        Some(ParentMessage::Focus)
    ));
    assert!(receiver.recv().expect("recv").is_none());
}

#[test]
fn child_closed_round_trips() {
    let mut wire = Vec::new();
    LineSender::new(&mut wire)
        .send(&ChildMessage::Closed)
        .expect("send closed");
    let mut receiver = LineReceiver::<_, ChildMessage>::new(Cursor::new(wire));
    assert!(matches!(
        receiver.recv().expect("recv"),
        Some(ChildMessage::Closed)
    ));
}
