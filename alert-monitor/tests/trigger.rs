use std::sync::{atomic::{AtomicUsize, Ordering}, Arc};

use alert_monitor::trigger::{PeriodicTimer, TimerId, WakeSignal};
use tokio::time::{sleep, timeout, Duration};

#[tokio::test(start_paused = true)]
async fn gives_before_take_coalesce(){
    let wake = WakeSignal::new();
    wake.give();
    wake.give();
    wake.give();
    assert!(timeout(Duration::from_millis(10), wake.take()).await.is_ok());
    assert!(timeout(Duration::from_secs(1), wake.take()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn give_wakes_a_waiting_consumer(){
    let wake = WakeSignal::new();
    let woken = Arc::new(AtomicUsize::new(0));
    let task ={
        let wake = wake.clone();
        let woken = woken.clone();
        tokio::spawn(async move{
            loop{
                wake.take().await;
                woken.fetch_add(1, Ordering::SeqCst);
            }
        })
    };
    sleep(Duration::from_millis(10)).await;
    assert_eq!(woken.load(Ordering::SeqCst), 0);
    wake.give();
    sleep(Duration::from_millis(10)).await;
    assert_eq!(woken.load(Ordering::SeqCst), 1);
    task.abort();
}

#[tokio::test(start_paused = true)]
async fn timer_fires_once_per_period(){
    let fired = Arc::new(AtomicUsize::new(0));
    let mut timer ={
        let fired = fired.clone();
        PeriodicTimer::new(TimerId::A, Duration::from_millis(100), move ||{
            fired.fetch_add(1, Ordering::SeqCst);
        })
    };
    assert!(!timer.running());
    assert!(timer.start());
    assert!(!timer.start());

    sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 10);

    timer.stop();
    assert!(!timer.running());
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 10);
}

#[tokio::test(start_paused = true)]
async fn waking_timer_gives_every_target(){
    let a = WakeSignal::new();
    let b = WakeSignal::new();
    let mut timer = PeriodicTimer::waking(TimerId::B, Duration::from_millis(500), vec![a.clone(), b.clone()]);
    assert_eq!(timer.id(), TimerId::B);
    assert_eq!(timer.period(), Duration::from_millis(500));
    timer.start();

    // Nobody is taking, so three expiries leave a single pending wake on each target
    sleep(Duration::from_millis(1600)).await;
    assert!(timeout(Duration::from_millis(1), a.take()).await.is_ok());
    assert!(timeout(Duration::from_millis(1), b.take()).await.is_ok());
    timer.stop();
    assert!(timeout(Duration::from_secs(5), a.take()).await.is_err());
}
