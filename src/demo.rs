/// Sample input scanned when no `--text` is given.
pub const DEMO_TEXT: &str = "
    Test run: ВК0001АО (in region), АА9999КМ (other region, ignored),
    Today's date: 26.11.2025. РК1234ВС (in region),
    Local IP: 192.168.1.10. One more plate: BK5555AA.
    Malformed plate: РК123АВ. Another date: 01.01.2000.
    Public IP: 203.0.113.45.
";
