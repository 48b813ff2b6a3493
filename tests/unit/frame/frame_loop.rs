use super::*;

use std::cell::Cell;
use std::rc::Rc;

use crate::frame::source::ManualFrameSource;
use crate::scheduler::Callback;

#[test]
fn start_arms_exactly_once() {
    let lp = FrameLoop::start(Scheduler::new(), ManualFrameSource::new(0)).unwrap();
    assert_eq!(lp.source().requests(), 1);
    assert!(lp.source().is_armed());
}

#[test]
fn rearms_once_per_fired_frame() {
    let sched = Scheduler::new();
    let n = Rc::new(Cell::new(0));
    {
        let n = Rc::clone(&n);
        sched.register(&Callback::new(move || n.set(n.get() + 1)));
    }

    let mut lp = FrameLoop::start(sched, ManualFrameSource::new(7)).unwrap();
    let stats = lp.run().unwrap();

    assert_eq!(n.get(), 7);
    assert_eq!(stats.ticks, 7);
    assert_eq!(stats.rearms, 7);
    assert_eq!(lp.source().requests(), 8);
    assert_eq!(lp.scheduler().ticks(), 7);
}

#[test]
fn pump_after_close_keeps_reporting_closed() {
    let mut lp = FrameLoop::start(Scheduler::new(), ManualFrameSource::new(1)).unwrap();
    assert!(lp.pump().unwrap().is_some());
    assert!(lp.pump().unwrap().is_none());
    assert!(lp.pump().unwrap().is_none());

    lp.source_mut().extend(2);
    assert_eq!(lp.run().unwrap().ticks, 3);
}

#[test]
fn faults_accumulate_in_stats() {
    let sched = Scheduler::new();
    sched.register(&Callback::fallible(|| Err(anyhow::anyhow!("nope"))));
    let mut lp = FrameLoop::start(sched, ManualFrameSource::new(4)).unwrap();
    let stats = lp.run().unwrap();
    assert_eq!(stats.faults, 4);
    assert_eq!(stats.ticks, 4);
}
