//! End-to-end tests against a mock speaker HTTP server.

use mockito::{Matcher, Mock, Server, ServerGuard};
use multiroom::{Config, Error, PowerState, Snapshot, Source, Speaker, SubMode};
use std::time::Duration;

fn uic(fields: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><UIC><method>Reply</method><version>1.0</version><speakerip>10.0.0.5</speakerip><user_identifier></user_identifier><response result="ok">{}</response></UIC>"#,
        fields
    )
}

fn cpm(fields: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><CPM><method>RadioInfo</method><version>0.1</version><response result="ok">{}</response></CPM>"#,
        fields
    )
}

fn config(server: &ServerGuard) -> Config {
    let address = server.host_with_port();
    let (host, port) = address.rsplit_once(':').unwrap();
    Config::new(host).with_port(port.parse().unwrap())
}

async fn reply(server: &mut ServerGuard, path: &str, cmd: &str, body: String) -> Mock {
    reply_times(server, path, cmd, body, 1).await
}

async fn reply_times(
    server: &mut ServerGuard,
    path: &str,
    cmd: &str,
    body: String,
    hits: usize,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::UrlEncoded("cmd".into(), cmd.into()))
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

#[tokio::test]
async fn test_refresh_content_player_scenario() {
    let mut server = Server::new_async().await;
    let power = reply(
        &mut server,
        "/UIC",
        "<name>GetPowerStatus</name>",
        uic("<powerStatus>1</powerStatus>"),
    )
    .await;
    let func = reply_times(
        &mut server,
        "/UIC",
        "<name>GetFunc</name>",
        uic("<function>wifi</function><submode>cp</submode>"),
        2,
    )
    .await;
    let volume = reply(
        &mut server,
        "/UIC",
        "<name>GetVolume</name>",
        uic("<volume>30</volume>"),
    )
    .await;
    let mute = reply(&mut server, "/UIC", "<name>GetMute</name>", uic("<mute>off</mute>")).await;
    let radio = reply_times(
        &mut server,
        "/CPM",
        "<name>GetRadioInfo</name>",
        cpm("<title><![CDATA[Jazz FM]]></title><thumbnail><![CDATA[http://img.example/jazz.png]]></thumbnail>"),
        2,
    )
    .await;

    let speaker = Speaker::new(&config(&server)).unwrap();
    let snapshot = speaker.snapshot().await;

    assert_eq!(snapshot.power, PowerState::On);
    assert_eq!(snapshot.source, Some(Source::Wifi));
    assert_eq!(snapshot.volume, 0.30);
    assert!(!snapshot.muted);
    assert_eq!(snapshot.sub_mode, Some(SubMode::ContentPlayer));
    assert_eq!(snapshot.media_title.as_deref(), Some("Jazz FM"));
    assert_eq!(
        snapshot.media_image_url.as_deref(),
        Some("http://img.example/jazz.png")
    );

    power.assert_async().await;
    func.assert_async().await;
    volume.assert_async().await;
    mute.assert_async().await;
    radio.assert_async().await;
}

#[tokio::test]
async fn test_set_muted_sends_string_param() {
    let mut server = Server::new_async().await;
    let mock = reply(
        &mut server,
        "/UIC",
        r#"<name>SetMute</name><p type="str" name="mute" val="on"/>"#,
        uic("<mute>on</mute>"),
    )
    .await;

    let speaker = Speaker::new(&config(&server)).unwrap();
    speaker.set_muted(true).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_volume_sends_decimal_param() {
    let mut server = Server::new_async().await;
    let mock = reply(
        &mut server,
        "/UIC",
        r#"<name>SetVolume</name><p type="dec" name="volume" val="25"/>"#,
        uic("<volume>25</volume>"),
    )
    .await;

    let speaker = Speaker::new(&config(&server).with_max_volume(50)).unwrap();
    speaker.set_volume_fraction(0.5).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_field_has_no_value() {
    let mut server = Server::new_async().await;
    let _mock = reply(&mut server, "/UIC", "<name>GetSpkName</name>", uic("")).await;

    let speaker = Speaker::new(&config(&server)).unwrap();
    assert_eq!(speaker.speaker_name().await, None);
}

#[tokio::test]
async fn test_http_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/UIC")
        .with_status(500)
        .create_async()
        .await;

    let speaker = Speaker::new(&config(&server)).unwrap();
    assert_eq!(speaker.volume().await, None);
    assert!(matches!(
        speaker.set_volume(3).await,
        Err(Error::Status(500))
    ));
}

#[tokio::test]
async fn test_malformed_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/UIC")
        .with_status(200)
        .with_body("<html><body>Not Found")
        .create_async()
        .await;

    let speaker = Speaker::new(&config(&server)).unwrap();
    assert_eq!(speaker.power_state().await, None);
    assert!(matches!(speaker.set_muted(false).await, Err(Error::Xml(_))));
}

#[tokio::test]
async fn test_rejected_action() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/UIC")
        .with_status(200)
        .with_body(r#"<UIC><method>ErrorEvent</method><response result="ng"><errCode>unknown command</errCode></response></UIC>"#)
        .create_async()
        .await;

    let speaker = Speaker::new(&config(&server)).unwrap();
    assert!(matches!(
        speaker.set_source(Source::Aux).await,
        Err(Error::Rejected(_))
    ));
}

#[tokio::test]
async fn test_timeout_degrades_to_off() {
    // accepts connections but never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let config = Config::new("127.0.0.1")
        .with_port(port)
        .with_timeout(Duration::from_millis(300));
    let speaker = Speaker::new(&config).unwrap();

    assert_eq!(speaker.volume().await, None);
    assert!(matches!(speaker.set_muted(true).await, Err(Error::Timeout(_))));

    let mut snapshot = Snapshot {
        power: PowerState::On,
        source: Some(Source::Hdmi),
        volume: 0.4,
        ..Snapshot::default()
    };
    snapshot.refresh(&speaker).await;
    assert_eq!(snapshot.power, PowerState::Off);
    assert_eq!(snapshot.source, Some(Source::Hdmi));
    assert_eq!(snapshot.volume, 0.4);

    drop(listener);
}

#[tokio::test]
async fn test_connection_refused_has_no_value() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let speaker = Speaker::new(&Config::new("127.0.0.1").with_port(port)).unwrap();

    assert_eq!(speaker.power_state().await, None);
    let err = speaker.set_power_state(PowerState::On).await.unwrap_err();
    assert!(err.is_network());
}
