use super::*;

fn reference_wp() -> WorkingPoints {
    WorkingPoints::new(vec![10.0, 20.0, 30.0], vec![0.5, 0.6, 0.7]).unwrap()
}

#[test]
fn test_select_objects_keeps_passing_entries_in_order() {
    let wp = reference_wp();
    let pt = vec![25.0f32, 5.0, 35.0, 25.0];
    let score = vec![0.65f32, 0.99, 0.71, 0.55];
    let out = select_objects(&pt, &score, &wp).unwrap();
    assert_eq!(out.pt, vec![25.0, 35.0]);
    assert_eq!(out.score, vec![0.65, 0.71]);
}

#[test]
fn test_select_objects_can_empty_a_collection() {
    let wp = reference_wp();
    let out = select_objects(&[5.0, 6.0], &[0.99, 0.99], &wp).unwrap();
    assert!(out.pt.is_empty());
    assert!(out.score.is_empty());
}

#[test]
fn test_apply_filters_each_event_and_drops_emptied_ones() {
    let wp = reference_wp();
    let mut events = vec![
        EventColumns {
            pt: vec![25.0, 5.0],
            score: vec![0.65, 0.99],
        },
        EventColumns {
            pt: vec![5.0, 6.0],
            score: vec![0.99, 0.99],
        },
        EventColumns {
            pt: vec![35.0],
            score: vec![0.71],
        },
    ];
    let stats = apply_working_points(&mut events, &wp).unwrap();
    assert_eq!(
        events,
        vec![
            EventColumns {
                pt: vec![25.0],
                score: vec![0.65],
            },
            EventColumns {
                pt: vec![35.0],
                score: vec![0.71],
            },
        ]
    );
    assert_eq!(stats.events_in, 3);
    assert_eq!(stats.events_kept, 2);
    assert_eq!(stats.objects_in, 5);
    assert_eq!(stats.objects_kept, 2);
}

#[test]
fn test_apply_drops_events_with_no_objects() {
    let wp = reference_wp();
    let mut events = vec![
        EventColumns {
            pt: Vec::new(),
            score: Vec::new(),
        },
        EventColumns {
            pt: vec![25.0],
            score: vec![0.65],
        },
    ];
    let stats = apply_working_points(&mut events, &wp).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(stats.events_in, 2);
    assert_eq!(stats.events_kept, 1);
}

#[test]
fn test_apply_validates_before_mutating() {
    let wp = reference_wp();
    let mut events = vec![
        EventColumns {
            pt: vec![25.0],
            score: vec![0.65],
        },
        EventColumns {
            pt: vec![1.0, 2.0],
            score: vec![0.5],
        },
    ];
    let before = events.clone();
    let err = apply_working_points(&mut events, &wp).unwrap_err();
    assert_eq!(
        err,
        SelectError::LengthMismatch {
            pt_len: 2,
            score_len: 1
        }
    );
    assert_eq!(events, before);
}

#[test]
fn test_apply_with_empty_table_drops_everything() {
    let wp = WorkingPoints::new(Vec::new(), Vec::new()).unwrap();
    let mut events = vec![EventColumns {
        pt: vec![25.0, 35.0],
        score: vec![0.65, 0.71],
    }];
    let stats = apply_working_points(&mut events, &wp).unwrap();
    assert!(events.is_empty());
    assert_eq!(stats.objects_kept, 0);
    assert_eq!(stats.events_kept, 0);
}

#[test]
fn test_apply_misaligned_table_is_rejected() {
    let wp = WorkingPoints {
        pt_bins: vec![10.0],
        score_cuts: Vec::new(),
    };
    let mut events = vec![EventColumns {
        pt: vec![25.0],
        score: vec![0.65],
    }];
    let err = apply_working_points(&mut events, &wp).unwrap_err();
    assert_eq!(
        err,
        SelectError::TableLengthMismatch {
            bins_len: 1,
            cuts_len: 0
        }
    );
}
