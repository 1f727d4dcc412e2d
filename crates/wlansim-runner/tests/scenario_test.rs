//! End-to-end scenario tests against the reference timings of the standard.

use wlansim_runner::{parse_scenario, run_scenario};

#[test]
fn test_reference_timings() {
    let yaml = r#"
        description: Reference timings
        transmissions:
          - label: legacy-ofdm
            mode: OfdmRate54Mbps
            preamble: long
            band: five_ghz
            size_bytes: 1000
          - label: dsss
            mode: DsssRate2Mbps
            preamble: long
            band: two_point_four_ghz
            size_bytes: 100
          - label: erp
            mode: ErpOfdmRate54Mbps
            preamble: long
            band: two_point_four_ghz
            size_bytes: 1000
    "#;

    let scenario = parse_scenario(yaml).unwrap();
    let reports = run_scenario(&scenario).unwrap();
    assert_eq!(reports.len(), 3);

    let ofdm = &reports[0];
    assert_eq!(ofdm.label, "legacy-ofdm");
    // 16 us preamble + 4 us header + 38 symbols of 4 us
    assert_eq!(ofdm.preamble_and_header_us, 20.0);
    assert_eq!(ofdm.payload_us, 152.0);
    assert_eq!(ofdm.total_us, 172.0);

    let dsss = &reports[1];
    // 144 + 48 us PLCP, ceil(800 / 2) = 400 us payload
    assert_eq!(dsss.preamble_and_header_us, 192.0);
    assert_eq!(dsss.payload_us, 400.0);
    assert_eq!(dsss.total_us, 592.0);

    let erp = &reports[2];
    // same as legacy OFDM plus the 6 us signal extension
    assert_eq!(erp.payload_us, 158.0);
    assert_eq!(erp.total_us, 178.0);
}

#[test]
fn test_aggregate_breakdown() {
    let yaml = r#"
        transmissions:
          - label: burst
            mode: OfdmRate54Mbps
            preamble: long
            band: five_ghz
            aggregate: [500, 700, 300]
    "#;

    let scenario = parse_scenario(yaml).unwrap();
    let reports = run_scenario(&scenario).unwrap();
    let burst = &reports[0];

    assert_eq!(burst.size_bytes, 1500);
    assert_eq!(burst.fragments.len(), 3);
    // 19, 25 and 12 symbols of 4 us
    assert_eq!(burst.fragments[0].payload_us, 76.0);
    assert_eq!(burst.fragments[1].payload_us, 100.0);
    assert_eq!(burst.fragments[2].payload_us, 48.0);
    assert_eq!(burst.payload_us, 224.0);
    // splitting the burst occupies exactly as long as one 1500-byte frame
    assert_eq!(burst.total_us, 20.0 + 224.0);
}

#[test]
fn test_priority_orders_reports() {
    let yaml = r#"
        transmissions:
          - label: bulk
            mode: OfdmRate6Mbps
            preamble: long
            band: five_ghz
            size_bytes: 200
            priority: low
          - label: voice
            mode: OfdmRate6Mbps
            preamble: long
            band: five_ghz
            size_bytes: 200
            priority: high
          - label: mail
            mode: OfdmRate6Mbps
            preamble: long
            band: five_ghz
            size_bytes: 200
    "#;

    let scenario = parse_scenario(yaml).unwrap();
    let reports = run_scenario(&scenario).unwrap();
    let labels: Vec<_> = reports.iter().map(|report| report.label.as_str()).collect();
    assert_eq!(labels, vec!["voice", "mail", "bulk"]);
}

#[test]
fn test_s1g_scenario() {
    let yaml = r#"
        transmissions:
          - label: sensor-report
            mode: OfdmRate300KbpsBW1MHz
            preamble: s1g_1m
            band: sub_ghz
            size_bytes: 100
    "#;

    let scenario = parse_scenario(yaml).unwrap();
    let reports = run_scenario(&scenario).unwrap();
    let report = &reports[0];
    // 320 us preamble + 240 us SIG, 68 symbols of 40 us
    assert_eq!(report.preamble_and_header_us, 560.0);
    assert_eq!(report.payload_us, 2720.0);
    assert_eq!(report.total_us, 3280.0);
}

#[test]
fn test_single_fragment_aggregate_rejected() {
    let yaml = r#"
        transmissions:
          - mode: OfdmRate54Mbps
            preamble: long
            band: five_ghz
            aggregate: [500]
    "#;

    let scenario = parse_scenario(yaml).unwrap();
    assert!(run_scenario(&scenario).is_err());
}
