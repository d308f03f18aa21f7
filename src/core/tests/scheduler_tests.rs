use std::collections::HashSet;

use crate::core::scheduler::ServerScheduler;

#[test]
fn single_server_serializes_in_arrival_order() {
    let arrivals = vec![0, 1, 3, 4, 6];
    let services = vec![2, 2, 2, 2, 2];
    let (schedules, timelines) = ServerScheduler::new(1).schedule(&arrivals, &services);

    let starts: Vec<u64> = schedules.iter().map(|s| s.start).collect();
    let finishes: Vec<u64> = schedules.iter().map(|s| s.finish).collect();
    let waiting: Vec<u64> = schedules.iter().map(|s| s.waiting).collect();
    assert_eq!(starts, vec![0, 2, 4, 6, 8]);
    assert_eq!(finishes, vec![2, 4, 6, 8, 10]);
    assert_eq!(waiting, vec![0, 1, 1, 2, 2]);
    assert!(schedules.iter().all(|s| s.server == 0));
    assert_eq!(timelines[0].len(), 5);
}

#[test]
fn idle_servers_take_simultaneous_arrivals_separately() {
    let arrivals = vec![0, 0, 0, 0, 0];
    let services = vec![3, 3, 3, 3, 3];
    let (schedules, _) = ServerScheduler::new(5).schedule(&arrivals, &services);

    let servers: HashSet<usize> = schedules.iter().map(|s| s.server).collect();
    assert_eq!(servers.len(), 5);
    assert!(schedules.iter().all(|s| s.start == 0));
    assert!(schedules.iter().all(|s| s.waiting == 0 && s.response == 0));
}

#[test]
fn busy_servers_fall_back_to_least_loaded() {
    let arrivals = vec![0, 0, 0];
    let services = vec![10, 10, 5];
    let (schedules, _) = ServerScheduler::new(2).schedule(&arrivals, &services);

    assert_eq!(schedules[0].server, 0);
    assert_eq!(schedules[1].server, 1);
    // both busy until 10: ties on availability resolve to the lowest index
    assert_eq!(schedules[2].server, 0);
    assert_eq!(schedules[2].start, 10);
    assert_eq!(schedules[2].finish, 15);
}

#[test]
fn arrival_ties_process_in_original_index_order() {
    let arrivals = vec![5, 5];
    let services = vec![4, 1];
    let (schedules, _) = ServerScheduler::new(1).schedule(&arrivals, &services);

    assert_eq!(schedules[0].start, 5);
    assert_eq!(schedules[0].finish, 9);
    assert_eq!(schedules[1].start, 9);
    assert_eq!(schedules[1].finish, 10);
}

#[test]
fn timelines_never_overlap_and_track_availability() {
    let arrivals = vec![3, 0, 7, 0, 2];
    let services = vec![1, 4, 2, 2, 5];
    let (schedules, timelines) = ServerScheduler::new(2).schedule(&arrivals, &services);

    assert_eq!(schedules.len(), 5);
    let patients: HashSet<usize> = schedules.iter().map(|s| s.patient).collect();
    let expected: HashSet<usize> = (0..5).collect();
    assert_eq!(patients, expected);

    for timeline in &timelines {
        for pair in timeline.windows(2) {
            assert!(pair[1].start >= pair[0].finish);
        }
    }

    // hand-traced dispatch: patients 1,3 open the servers, 0 waits on server 0
    assert_eq!(schedules[1].server, 0);
    assert_eq!(schedules[3].server, 1);
    assert_eq!(schedules[0].server, 0);
    assert_eq!(schedules[0].start, 4);
    assert_eq!(schedules[0].waiting, 1);
    assert_eq!(schedules[4].server, 1);
    assert_eq!(schedules[4].start, 2);
    assert_eq!(schedules[2].start, 7);
}

#[test]
fn identities_hold_for_every_patient() {
    let arrivals = vec![0, 2, 2, 5, 9, 9, 11];
    let services = vec![4, 1, 6, 2, 3, 3, 1];
    let (schedules, _) = ServerScheduler::new(3).schedule(&arrivals, &services);

    for schedule in &schedules {
        let arrival = arrivals[schedule.patient];
        let service = services[schedule.patient];
        assert_eq!(schedule.turnaround, schedule.finish - arrival);
        assert_eq!(schedule.waiting, schedule.turnaround - service);
        assert_eq!(schedule.response, schedule.start - arrival);
        assert!(schedule.start >= arrival);
    }
}
