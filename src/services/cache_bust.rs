use rand::Rng;

/// `base?rand=<n>`, redrawn until it differs from `previous`.
pub fn cache_busted(base: &str, previous: &str) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let src = format!("{}?rand={}", base, rng.gen::<f64>());
        if src != previous {
            return src;
        }
    }
}
