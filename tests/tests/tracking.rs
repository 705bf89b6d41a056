//! What the tracker callback receives.

use vigil_tests::prelude::*;

mod reads {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_property() {
        init_logging();
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        let _ = tracker.get("name");

        assert_eq!(recorder.changes(), vec![Change::get("name", "furqan")]);
    }

    #[test]
    fn test_get_nested_property_reports_leaf_only() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        let value = tracker
            .at(["address", "geo", "encoding"])
            .unwrap()
            .get("type")
            .into_value();

        assert_eq!(value, Some(Value::from("map")));
        assert_eq!(recorder.changes(), vec![Change::get("type", "map")]);
    }

    #[test]
    fn test_get_list_index() {
        let mut target = hobbies();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        let _ = tracker.get("0");

        assert_eq!(recorder.changes(), vec![Change::get("0", "tennis")]);
    }

    #[test]
    fn test_reading_composite_is_not_reported() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        let access = tracker.get("address");

        assert!(matches!(access, Access::Nested(_)));
        assert!(recorder.is_empty());
    }
}

mod writes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_property() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker.set("name", "Sana");

        drop(tracker);
        assert_eq!(
            recorder.changes(),
            vec![Change::set("name", "Sana", "furqan")]
        );
        assert_eq!(target["name"], Value::from("Sana"));
    }

    #[test]
    fn test_callback_runs_before_assignment() {
        let mut target = profile();
        let mut tracker = track(&mut target, |event| {
            assert_eq!(event.op, OpType::Set);
            assert_eq!(event.target["name"], Value::from("furqan"));
        })
        .unwrap();

        tracker.set("name", "Sana");

        drop(tracker);
        assert_eq!(target["name"], Value::from("Sana"));
    }

    #[test]
    fn test_set_nested_property() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker
            .at(["address", "geo", "encoding"])
            .unwrap()
            .set("type", "geo");

        assert_eq!(recorder.changes(), vec![Change::set("type", "geo", "map")]);
    }

    #[test]
    fn test_set_list_index() {
        let mut target = hobbies();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker.set("1", "reading");

        drop(tracker);
        assert_eq!(recorder.changes(), vec![Change::insert("1", "reading")]);
        assert_eq!(target, Value::from(json!(["tennis", "reading"])));
    }

    #[test]
    fn test_set_object_inside_list_reports_inner_key() {
        let mut target = Value::from(json!([1, 2, { "a": 3 }]));
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker.nested_at(2usize).unwrap().set("a", 4);

        assert_eq!(recorder.changes(), vec![Change::set("a", 4, 3)]);
    }

    #[test]
    fn test_assign_reports_one_set_per_entry() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker.assign([("phone", "1234")]);

        assert_eq!(recorder.changes(), vec![Change::insert("phone", "1234")]);
    }

    #[test]
    fn test_define_property_is_not_reported() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker.define_property("phone", "94930302");

        assert!(recorder.is_empty());
    }
}

mod deletes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_delete_nested_property() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker
            .at(["address", "geo", "encoding"])
            .unwrap()
            .delete("type");

        drop(tracker);
        assert_eq!(recorder.changes(), vec![Change::delete("type")]);
        assert!(target["address"]["geo"]["encoding"].get("type").is_none());
    }

    #[test]
    fn test_callback_runs_before_deletion() {
        let mut target = profile();
        let mut tracker = track(&mut target, |event| {
            assert_eq!(event.op, OpType::Delete);
            assert!(event.target.get("age").is_some());
        })
        .unwrap();

        assert!(tracker.delete("age"));
    }
}

mod shared_callback {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_trackers_share_one_callback() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        let _ = tracker.get("age");
        tracker.nested_at("address").unwrap().set("zipcode", "56005");
        tracker.nested_at("hobbies").unwrap().push("chess").unwrap();
        tracker.delete("isSmart");

        let ops: Vec<OpType> = recorder.changes().iter().map(|c| c.op).collect();
        assert_eq!(
            ops,
            vec![OpType::Get, OpType::Set, OpType::Set, OpType::Delete]
        );
    }

    #[test]
    fn test_recorder_clear_forgets_earlier_changes() {
        let mut target = profile();
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        tracker.set("name", "Sana");
        recorder.clear();
        assert!(recorder.is_empty());

        tracker.delete("isSmart");

        assert_eq!(recorder.changes(), vec![Change::delete("isSmart")]);
    }

    #[test]
    #[should_panic(expected = "tracker refused")]
    fn test_callback_panics_propagate() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| panic!("tracker refused")).unwrap();

        tracker.set("name", "Sana");
    }
}
