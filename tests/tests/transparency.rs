//! Writes through a tracker land on the wrapped value.

use vigil_tests::prelude::*;

mod primitives {
    use super::*;

    #[test]
    fn test_set_string() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.set("name", "Sana");

        drop(tracker);
        assert_eq!(target["name"], Value::from("Sana"));
    }

    #[test]
    fn test_set_number() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.set("age", 20);

        drop(tracker);
        assert_eq!(target["age"], Value::Int(20));
    }

    #[test]
    fn test_set_boolean() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.set("isSmart", true);

        drop(tracker);
        assert_eq!(target["isSmart"], Value::Bool(true));
    }

    #[test]
    fn test_reads_match_direct_access() {
        let mut target = profile();
        let expected = target.clone();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        assert_eq!(tracker.get("name").into_value().as_ref(), expected.get("name"));
        assert_eq!(tracker.get("age").into_value().as_ref(), expected.get("age"));
        assert!(tracker.get("nickname").is_absent());

        drop(tracker);
        assert_eq!(target, expected);
    }
}

mod nested {
    use super::*;

    #[test]
    fn test_set_nested_objects() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.nested_at("address").unwrap().set("city", "Vancouver");
        tracker
            .at(["address", "geo", "encoding"])
            .unwrap()
            .set("type", "gmap");

        drop(tracker);
        assert_eq!(target["address"]["city"], Value::from("Vancouver"));
        assert_eq!(
            target["address"]["geo"]["encoding"]["type"],
            Value::from("gmap")
        );
    }

    #[test]
    fn test_set_object_inside_list() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        let mut first = tracker
            .at([
                PropertyKey::from("companies"),
                PropertyKey::from("professional"),
                PropertyKey::Index(0),
            ])
            .unwrap();
        first.set("title", "Principal Software Engineer");

        drop(first);
        drop(tracker);
        assert_eq!(
            target["companies"]["professional"][0]["title"],
            Value::from("Principal Software Engineer")
        );
    }

    #[test]
    fn test_each_read_hands_out_a_new_wrapper() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.nested_at("address").unwrap().set("city", "Pune");
        let city = tracker
            .nested_at("address")
            .unwrap()
            .get("city")
            .into_value();

        assert_eq!(city, Some(Value::from("Pune")));
    }
}

mod lists {
    use super::*;

    #[test]
    fn test_get_by_index() {
        let mut target = Value::from(json!([1, 2, 3]));
        let mut tracker = track(&mut target, |_| {}).unwrap();

        assert_eq!(tracker.get(0usize).into_value(), Some(Value::Int(1)));
        assert_eq!(tracker.get("2").into_value(), Some(Value::Int(3)));
    }

    #[test]
    fn test_set_by_index() {
        let mut target = Value::from(json!([1, 2, 3]));
        let mut tracker = track(&mut target, |_| {}).unwrap();

        assert!(tracker.set(0usize, 100));

        drop(tracker);
        assert_eq!(target, Value::from(json!([100, 2, 3])));
    }

    #[test]
    fn test_oversized_growth_is_rejected() {
        let mut target = Value::from(json!([1]));
        let recorder = Recorder::new();
        let mut tracker = create_tracker(&mut target, Some(recorder.tracker_fn())).unwrap();

        assert!(!tracker.set(4_000_000_000usize, 1));
        assert!(!tracker.set("length", 4_000_000_000i64));
        assert!(!tracker.set(usize::MAX, 1));

        drop(tracker);
        assert_eq!(recorder.count(), 3);
        assert_eq!(target, Value::from(json!([1])));
    }

    #[test]
    fn test_set_object_item_in_list() {
        let mut target = Value::from(json!(["tennis", { "type": "amateur" }]));
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.nested_at(1usize).unwrap().set("type", "Pro");

        drop(tracker);
        assert_eq!(target[1]["type"], Value::from("Pro"));
    }

    #[test]
    fn test_push() {
        let mut target = hobbies();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        assert_eq!(tracker.push("reading"), Ok(2));

        drop(tracker);
        assert_eq!(target[1], Value::from("reading"));
    }

    #[test]
    fn test_push_on_nested_list() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.nested_at("hobbies").unwrap().push("reading").unwrap();
        tracker
            .at(["companies", "professional"])
            .unwrap()
            .push(json!({ "name": "Google", "title": "Design Lead" }))
            .unwrap();

        drop(tracker);
        assert_eq!(target["hobbies"][1], Value::from("reading"));
        assert_eq!(
            target["companies"]["professional"][2]["name"],
            Value::from("Google")
        );
    }

    #[test]
    fn test_pop_returns_last_value() {
        let mut target = hobbies();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        assert_eq!(tracker.pop(), Ok(Value::from("tennis")));

        drop(tracker);
        assert_eq!(target, Value::from(json!([])));
    }
}

mod deletes {
    use super::*;

    #[test]
    fn test_delete_property() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        assert!(tracker.delete("age"));

        drop(tracker);
        assert!(target.get("age").is_none());
    }

    #[test]
    fn test_delete_nested_property() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.at(["address", "geo"]).unwrap().delete("encoding");

        drop(tracker);
        assert!(target["address"]["geo"].get("encoding").is_none());
    }
}

mod define_property {
    use super::*;

    #[test]
    fn test_define_new_property() {
        let mut target = profile();
        let mut tracker = track(&mut target, |_| {}).unwrap();

        tracker.define_property("phone", "94930302");

        drop(tracker);
        assert_eq!(target["phone"], Value::from("94930302"));
    }
}
