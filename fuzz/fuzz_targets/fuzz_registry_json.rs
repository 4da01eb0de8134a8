#![no_main]

use launchpad::config::AppRegistry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the registry parser
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(registry) = serde_json::from_str::<AppRegistry>(s) {
            // Anything accepted must serialize back to an equivalent registry
            let json = serde_json::to_string(&registry).unwrap();
            let reparsed: AppRegistry = serde_json::from_str(&json).unwrap();
            assert_eq!(reparsed.entries(), registry.entries());
        }
    }
});
