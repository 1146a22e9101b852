use std::time::Duration;

use alert_internal::{alarm::Thresholds, board::{AnalogChannel, SerialPort}};
use alert_monitor::{
    config::Config,
    drivers::mock::{self, Recorder, ScriptedAnalog, ScriptedRanging},
    launch, Error,
};

#[test]
pub fn defaults_match_the_board(){
    let c = Config::default();
    assert_eq!(c.proximity.period(), Duration::from_millis(500));
    assert_eq!((c.proximity.echo_gpio, c.proximity.trigger_gpio), (5, 3));
    assert_eq!(c.alarm.thresholds, Thresholds{near_cm: 500, caution_min_cm: 300, danger_max_cm: 300});
    assert_eq!(c.alarm.caution_hold(), Duration::from_secs(1));
    assert_eq!(c.alarm.danger_hold(), Duration::from_millis(500));
    assert_eq!(c.alarm.housekeeping(), Duration::from_secs(1));
    assert_eq!(c.status.period(), Duration::from_millis(500));
    assert_eq!(c.status.device_name, "Alertas de seguridad");
    assert_eq!(c.fall.channel, AnalogChannel::Ch0);
    assert_eq!(c.fall.threshold, 4);
    assert_eq!(c.fall.port, SerialPort::Pc);
    assert_eq!(c.fall.baud_rate, 115_200);
    assert!(c.validate().is_ok());
}

#[test]
pub fn empty_file_is_all_defaults(){
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
pub fn partial_overrides(){
    let c = Config::from_toml_str(r#"
        [alarm]
        caution_hold_ms = 2500

        [alarm.thresholds]
        near_cm = 450

        [fall]
        channel = "Ch1"
        threshold = 900
    "#).unwrap();
    assert_eq!(c.alarm.caution_hold(), Duration::from_millis(2500));
    assert_eq!(c.alarm.danger_hold(), Duration::from_millis(500));
    assert_eq!(c.alarm.thresholds, Thresholds{near_cm: 450, caution_min_cm: 300, danger_max_cm: 300});
    assert_eq!(c.fall.channel, AnalogChannel::Ch1);
    assert_eq!(c.fall.threshold, 900);
    assert_eq!(c.proximity, Config::default().proximity);
}

#[test]
pub fn unusable_values_are_rejected(){
    for text in [
        "[proximity]\nperiod_us = 0",
        "[fall]\nperiod_us = 0",
        "[status]\nperiod_ms = 0",
        "[fall]\nbaud_rate = 0",
        "[alarm.thresholds]\ncaution_min_cm = 600",
    ]{
        match Config::from_toml_str(text){
            Err(Error::InvalidConfig(_)) => {}
            other => panic!("{:?} for {:?}", other, text),
        }
    }
}

#[test]
pub fn malformed_toml_is_a_parse_error(){
    assert!(matches!(Config::from_toml_str("[alarm"), Err(Error::ConfigParse(_))));
    assert!(matches!(Config::from_toml_str("[alarm]\ncaution_hold_ms = \"long\""), Err(Error::ConfigParse(_))));
}

#[test]
pub fn missing_file_is_an_io_error(){
    assert!(matches!(Config::load("/nonexistent/alert-monitor.toml"), Err(Error::Io(_))));
}

#[tokio::test(start_paused = true)]
async fn alarm_gpio_reaches_the_alarm_line(){
    let config = Config::from_toml_str("[alarm]\nalarm_gpio = 7").unwrap();
    assert_eq!(config.alarm.alarm_gpio, 7);

    let rec = Recorder::new();
    let board = mock::board(&rec, ScriptedRanging::new(&[600]), ScriptedAnalog::new(&[]));
    let monitor = launch(&config, board).await.unwrap();
    assert_eq!(monitor.alarm_state().gpio(), 7);
    monitor.shutdown().await;
}
