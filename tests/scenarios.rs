//! End-to-end pipeline scenarios.

use u_procsched::metrics::{compute_metrics, process_stats};
use u_procsched::models::ProcessDescriptor;
use u_procsched::scheduler::{
    run_fcfs, run_priority, run_round_robin, run_sjf, run_srtf, Algorithm,
};
use u_procsched::security::mitigate;
use u_procsched::simulation::{SimulationConfig, Simulator};

fn spans(timeline: &u_procsched::models::Timeline) -> Vec<(&str, i64, i64)> {
    timeline
        .segments
        .iter()
        .map(|s| (s.process_id.as_str(), s.start, s.finish))
        .collect()
}

#[test]
fn test_scenario_a_mitigate_then_fcfs() {
    let processes = vec![
        ProcessDescriptor::new("P1", 0, 12).with_priority(1),
        ProcessDescriptor::new("P2", 1, 4).with_priority(3),
    ];

    let mitigated = mitigate(&processes, 8, 2);
    let p1 = &mitigated[0];
    assert!(p1.is_rogue);
    assert_eq!(p1.burst, 6);
    assert_eq!(p1.priority, 4);
    assert!(!p1.terminated);
    assert!(!mitigated[1].is_rogue);

    let out = run_fcfs(&mitigated);
    assert_eq!(spans(&out.timeline), vec![("P1", 0, 6), ("P2", 6, 10)]);
    assert!(out.timeline.segments[0].is_rogue);
    assert!(!out.timeline.segments[1].is_rogue);

    let m = compute_metrics(&out.timeline.segments, &mitigated);
    assert!((m.average_waiting_time - 2.5).abs() < 1e-10);
    assert!((m.detection_rate - 0.5).abs() < 1e-10);
}

#[test]
fn test_scenario_b_round_robin_quantum_two() {
    let processes = vec![
        ProcessDescriptor::new("P1", 0, 5),
        ProcessDescriptor::new("P2", 1, 3),
    ];
    let out = run_round_robin(&processes, 2);
    assert_eq!(
        spans(&out.timeline),
        vec![
            ("P1", 0, 2),
            ("P2", 2, 4),
            ("P1", 4, 6),
            ("P2", 6, 7),
            ("P1", 7, 8),
        ]
    );
    assert!(out.processes.iter().all(|p| p.remaining == 0));
}

#[test]
fn test_scenario_c_srtf_tie_keeps_running_process() {
    let processes = vec![
        ProcessDescriptor::new("P1", 0, 5),
        ProcessDescriptor::new("P2", 2, 3),
    ];
    // At t=2 both need 3 more ticks; P1 (lower index) is already running.
    let out = run_srtf(&processes);
    assert_eq!(spans(&out.timeline), vec![("P1", 0, 5), ("P2", 5, 8)]);
}

#[test]
fn test_scenario_d_single_process_every_policy() {
    let processes = vec![ProcessDescriptor::new("P1", 3, 4).with_priority(2)];
    let outcomes = vec![
        run_fcfs(&processes),
        run_sjf(&processes),
        run_srtf(&processes),
        run_round_robin(&processes, 2),
        run_priority(&processes),
    ];

    for (algo, out) in Algorithm::ALL.iter().zip(outcomes) {
        let stats = process_stats(&out.timeline.segments, &processes);
        assert_eq!(stats[0].waiting, 0, "{algo}");
        assert_eq!(stats[0].completion, 7, "{algo}");
        assert_eq!(spans(&out.timeline), vec![("P1", 3, 7)], "{algo}");
    }
}

#[test]
fn test_empty_input_every_policy() {
    for algo in Algorithm::ALL {
        let out = algo.run(&[], 3);
        assert!(out.timeline.is_empty());
        assert!(out.processes.is_empty());
    }
    let m = compute_metrics(&[], &[]);
    assert_eq!(m.average_waiting_time, 0.0);
    assert_eq!(m.average_turnaround_time, 0.0);
    assert_eq!(m.throughput, 0.0);
    assert_eq!(m.cpu_utilization, 0.0);
    assert_eq!(m.detection_rate, 0.0);
}

#[test]
fn test_policies_differ_on_same_workload() {
    let processes = vec![
        ProcessDescriptor::new("P1", 0, 8).with_priority(3),
        ProcessDescriptor::new("P2", 1, 4).with_priority(1),
        ProcessDescriptor::new("P3", 2, 2).with_priority(2),
    ];
    let simulator = Simulator::new(SimulationConfig::new().with_quantum(2));
    let reports = simulator.run_all(&processes).unwrap();

    let waiting: Vec<f64> = reports
        .iter()
        .map(|r| r.metrics.average_waiting_time)
        .collect();
    // FCFS: 0, 7, 10 → 5.667
    assert!((waiting[0] - 5.667).abs() < 1e-10);
    // SJF: P1 0-8, P3 8-10, P2 10-14 → 0, 9, 6 → 5.0
    assert!((waiting[1] - 5.0).abs() < 1e-10);
    // SRTF: P1 0-1, P2 1-2, P3 2-4, P2 4-7, P1 7-14 → 6, 2, 0 → 2.667
    assert!((waiting[2] - 2.667).abs() < 1e-10);

    for r in &reports {
        assert!((r.metrics.cpu_utilization - 100.0).abs() < 1e-10);
        assert_eq!(r.timeline.makespan(), 14);
    }
}
