//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of NDJSON lines in one schema
//! shape. Timestamps are fixed so rendered output is reproducible.

use std::io::Write;
use std::path::PathBuf;

/// Rich-shape lines (`levelName`, `subsystem`/`category`, epoch-ms timestamps).
pub const CORPUS_RICH: &[&str] = &[
    r#"{"timestamp":1705312800000,"levelName":"Info","subsystem":"app","category":"lifecycle","message":"Application started","file":"/Users/dev/App/AppDelegate.swift","function":"application(_:didFinishLaunchingWithOptions:)"}"#,
    r#"{"timestamp":1705312801000,"levelName":"Debug","subsystem":"net","category":"http","message":"GET /api/v1/users","file":"/Users/dev/App/Net/Client.swift","function":"send(_:)"}"#,
    r#"{"timestamp":1705312802000,"levelName":"Warning","subsystem":"net","category":"io","message":"timeout","file":"/Users/dev/App/Net/Client.swift","function":"send(_:)"}"#,
    r#"{"timestamp":1705312803000,"levelName":"Notice","subsystem":"db","message":"migration 42 applied"}"#,
    r#"{"timestamp":1705312804000,"levelName":"Trace","category":"render","message":"frame 1182 committed"}"#,
    r#"{"timestamp":1705312805000,"levelName":"Error","subsystem":"db","category":"pool","message":"connection refused","file":"/Users/dev/App/DB/Pool.swift","function":"acquire()"}"#,
    r#"{"timestamp":1705312806000,"levelName":"Critical","message":"Out of memory"}"#,
    r#"{"timestamp":1705312807000,"message":"heartbeat"}"#,
];

/// Simple-shape lines (`level`, `tag`, string timestamps, line numbers).
pub const CORPUS_SIMPLE: &[&str] = &[
    r#"{"timestamp":"2024-01-15T10:00:00Z","level":"info","tag":"server","text":"Server started","file":"src/main.rs","line":12,"method":"main"}"#,
    r#"{"timestamp":"2024-01-15 10:00:01","level":"debug","tag":"cache","text":"Cache miss","file":"src/cache.rs","line":88,"method":"get"}"#,
    r#"{"timestamp":"2024-01-15T10:00:02Z","level":"warning","tag":"db","text":"Slow query","file":"src/db.rs","line":140,"method":"query"}"#,
    r#"{"timestamp":"2024-01-15T10:00:03Z","level":"error","tag":"db","text":"Connection refused","file":"src/db.rs","line":151,"method":"connect"}"#,
    r#"{"timestamp":"not a date","level":"fatal","text":"Panic: index out of bounds"}"#,
];

/// Lines whose content would break an unescaped page.
pub const CORPUS_HOSTILE: &[&str] = &[
    r#"{"level":"error","tag":"x\" onmouseover=\"alert(1)","text":"</script><script>alert('pwned')</script>"}"#,
    r#"{"level":"info","tag":"<b>bold</b>","text":"<!-- comment --> & entity &amp;","method":"<img src=x onerror=alert(2)>"}"#,
];

/// Lines mixing garbage with valid simple-shape records.
pub const CORPUS_MALFORMED: &[&str] = &[
    "not valid json",
    r#"{"level":"error","text":"boom"}"#,
    r#"{"level":"info","text":"truncated"#,
    "",
];

/// Write `lines` to `<dir>/<name>`, one per line, and return the path.
pub fn write_ndjson(dir: &std::path::Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}
