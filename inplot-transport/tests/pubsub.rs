use inplot_transport::{Publisher, Subscriber};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const TOPIC_A: &[u8] = b"dev1 card0\0";
const TOPIC_B: &[u8] = b"dev2 card7\0";

#[test]
fn subscriber_receives_only_matching_topic() {
    let mut publisher = Publisher::bind(0).expect("bind publisher");
    let port = publisher.local_port().expect("local port");

    let (connected_tx, connected_rx) = mpsc::channel();
    let (batch_tx, batch_rx) = mpsc::channel();
    let reader = thread::spawn(move || {
        let mut subscriber = Subscriber::connect(port, TOPIC_A).expect("connect subscriber");
        connected_tx.send(()).expect("signal connected");
        let batch = subscriber.recv().expect("recv batch");
        batch_tx.send(batch).expect("deliver batch");
    });

    connected_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("subscriber connected");

    // Keep publishing until the subscriber has been admitted and the
    // matching batch got through. Frames on one connection are ordered,
    // so if the foreign batch were ever delivered it would arrive first.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    let batch = loop {
        publisher
            .publish(TOPIC_B, &[666.0, 667.0])
            .expect("publish foreign");
        publisher
            .publish(TOPIC_A, &[1.0, 2.0, 3.0])
            .expect("publish matching");
        match batch_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(batch) => break batch,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                assert!(
                    std::time::Instant::now() < deadline,
                    "subscriber never received the matching batch"
                );
            }
            Err(err) => panic!("subscriber thread died: {err}"),
        }
    };

    assert_eq!(batch, vec![1.0, 2.0, 3.0]);
    reader.join().expect("join subscriber thread");
}

#[test]
fn publisher_drops_disconnected_subscribers() {
    let mut publisher = Publisher::bind(0).expect("bind publisher");
    let port = publisher.local_port().expect("local port");

    {
        let _subscriber = Subscriber::connect(port, TOPIC_A).expect("connect subscriber");
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while publisher.subscriber_count() == 0 {
            publisher.poll_subscribers().expect("poll");
            assert!(std::time::Instant::now() < deadline, "never admitted");
            thread::sleep(Duration::from_millis(10));
        }
    }

    // The peer is gone; repeated publishes must eventually shed it
    // rather than failing forever.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while publisher.subscriber_count() > 0 {
        publisher.publish(TOPIC_A, &[0.0; 64]).expect("publish");
        assert!(std::time::Instant::now() < deadline, "never dropped");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn publish_without_subscribers_is_fine() {
    let mut publisher = Publisher::bind(0).expect("bind publisher");
    publisher.publish(TOPIC_A, &[1.0]).expect("publish");
    assert_eq!(publisher.subscriber_count(), 0);
}
