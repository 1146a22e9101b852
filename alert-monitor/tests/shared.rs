use std::{sync::{atomic::{AtomicBool, Ordering}, Arc}, thread};

use alert_internal::ALARM_GPIO;
use alert_monitor::{drivers::mock::{Activity, Recorder}, shared::{AlarmLine, SharedDistance}};

const PATTERN_A: u16 = 0x00FF;
const PATTERN_B: u16 = 0xFF00;

#[test]
pub fn readers_never_see_a_torn_distance(){
    let distance = SharedDistance::new(PATTERN_A);
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..2).map(|_|{
        let distance = distance.clone();
        let done = done.clone();
        thread::spawn(move ||{
            let mut seen = 0usize;
            while !done.load(Ordering::Relaxed){
                let d = distance.load();
                assert!(d == PATTERN_A || d == PATTERN_B, "torn read {:#06x}", d);
                seen += 1;
            }
            seen
        })
    }).collect();

    let writer ={
        let distance = distance.clone();
        thread::spawn(move ||{
            for i in 0..200_000u32{
                distance.store(if i % 2 == 0 {PATTERN_B} else {PATTERN_A});
            }
        })
    };
    writer.join().unwrap();
    done.store(true, Ordering::Relaxed);
    for reader in readers{
        assert!(reader.join().unwrap() > 0);
    }
}

#[test]
pub fn alarm_line_state_follows_the_owner(){
    let rec = Recorder::new();
    let mut line = AlarmLine::new(Box::new(rec.pin("alarm")), ALARM_GPIO);
    let state = line.state();
    assert_eq!(state.gpio(), ALARM_GPIO);
    assert!(!state.is_asserted());

    line.assert();
    assert!(state.is_asserted());
    assert!(line.is_asserted());
    line.release();
    assert!(!state.is_asserted());

    assert_eq!(rec.activities(), vec![
        Activity::Pin{name: "alarm", high: false},
        Activity::Pin{name: "alarm", high: true},
        Activity::Pin{name: "alarm", high: false},
    ]);
}

#[test]
pub fn dropping_the_line_releases_it(){
    let rec = Recorder::new();
    let mut line = AlarmLine::new(Box::new(rec.pin("alarm")), ALARM_GPIO);
    let state = line.state();
    line.assert();
    drop(line);
    assert!(!state.is_asserted());
    assert_eq!(rec.levels("alarm").last().map(|(_, high)| *high), Some(false));
}
