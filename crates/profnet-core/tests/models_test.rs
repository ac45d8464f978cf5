use proptest::prelude::*;

use profnet_core::models::*;

#[test]
fn connection_status_names_roundtrip() {
    for status in [
        ConnectionStatus::Request,
        ConnectionStatus::Accept,
        ConnectionStatus::Reject,
    ] {
        assert_eq!(ConnectionStatus::from_str_name(status.as_str()), Some(status));
    }
    assert_eq!(ConnectionStatus::from_str_name("accept"), None);
}

#[test]
fn only_accept_is_traversable() {
    assert!(ConnectionStatus::Accept.is_traversable());
    assert!(!ConnectionStatus::Request.is_traversable());
    assert!(!ConnectionStatus::Reject.is_traversable());
}

#[test]
fn connection_status_serializes_as_column_value() {
    let json = serde_json::to_string(&ConnectionStatus::Accept).unwrap();
    assert_eq!(json, "\"Accept\"");
}

#[test]
fn edge_keeps_request_direction() {
    let edge = ConnectionEdge::new("a", "b", ConnectionStatus::Request);
    assert_eq!(edge.user_id, "a");
    assert_eq!(edge.connection_id, "b");
    assert_eq!(edge, ConnectionEdge::new("a", "b", ConnectionStatus::Request));
    assert_ne!(edge, ConnectionEdge::new("b", "a", ConnectionStatus::Request));
}

#[test]
fn sender_then_receiver_delete_reaches_both() {
    let status = DeleteStatus::None.after_sender_delete();
    assert_eq!(status, DeleteStatus::DeletedBySender);
    assert!(!status.visible_to_sender());
    assert!(status.visible_to_receiver());

    let status = status.after_receiver_delete();
    assert_eq!(status, DeleteStatus::DeletedByBoth);
    assert!(!status.visible_to_receiver());
}

#[test]
fn repeated_delete_by_same_party_is_idempotent() {
    let once = DeleteStatus::None.after_sender_delete();
    assert_eq!(once.after_sender_delete(), once);
    let once = DeleteStatus::None.after_receiver_delete();
    assert_eq!(once.after_receiver_delete(), once);
}

#[test]
fn delete_status_codes_match_storage_encoding() {
    assert_eq!(DeleteStatus::None.code(), 0);
    assert_eq!(DeleteStatus::DeletedBySender.code(), 1);
    assert_eq!(DeleteStatus::DeletedByReceiver.code(), 2);
    assert_eq!(DeleteStatus::DeletedByBoth.code(), 3);
    assert_eq!(DeleteStatus::from_code(4), None);
}

#[test]
fn message_visibility_follows_delete_status() {
    let mut msg = Message {
        msg_id: 1,
        sender_id: "a".into(),
        receiver_id: "b".into(),
        contents: "hi".into(),
        send_time: chrono::Utc::now(),
        delete_status: DeleteStatus::None,
        status: MessageStatus::Delivered,
    };
    assert!(msg.visible_to("a"));
    assert!(msg.visible_to("b"));
    assert!(!msg.visible_to("c"));

    msg.delete_status = DeleteStatus::DeletedByReceiver;
    assert!(msg.visible_to("a"));
    assert!(!msg.visible_to("b"));
}

fn any_delete_status() -> impl Strategy<Value = DeleteStatus> {
    (0i64..=3).prop_map(|c| DeleteStatus::from_code(c).unwrap())
}

proptest! {
    #[test]
    fn delete_transitions_never_restore_visibility(start in any_delete_status(), sender_first in any::<bool>()) {
        let after = if sender_first {
            start.after_sender_delete()
        } else {
            start.after_receiver_delete()
        };
        prop_assert!(after.code() >= start.code());
        if !start.visible_to_sender() {
            prop_assert!(!after.visible_to_sender());
        }
        if !start.visible_to_receiver() {
            prop_assert!(!after.visible_to_receiver());
        }
    }
}
