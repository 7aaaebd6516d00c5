// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use hex::ToHex;
use kdf::{primitives::prf::Prf, HmacSha1, HmacSha256, HmacSha512, Pbkdf2};
use pbkdf2::pbkdf2_hmac;
use rand::{rngs::ThreadRng, Rng, RngCore};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use std::{
    env,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering::Relaxed},
    thread,
    time::Duration,
};

// atomic counter for the tests.
static COUNTER: AtomicU64 = AtomicU64::new(0);

// generate a vector of random length filled with random data based on a limit.
fn random_len_vec(limit: usize, rng: &mut ThreadRng) -> Vec<u8> {
    let mut buf = vec![0; rng.gen_range(0..limit.max(1))];
    rng.fill_bytes(&mut buf);
    buf
}

// Pbkdf2 Test Vector.
struct Pbkdf2Vector {
    password: Vec<u8>,
    salt: Vec<u8>,
    iterations: u32,
    dk_len: usize,
}

impl Pbkdf2Vector {
    // generate a random test vector.
    pub fn random(limit: usize, rng: &mut ThreadRng) -> Self {
        Self {
            password: random_len_vec(limit, rng),
            salt: random_len_vec(limit, rng),
            iterations: rng.gen_range(1..64),
            dk_len: rng.gen_range(1..limit.max(2)),
        }
    }

    // test the test vector against the reference implementation.
    pub fn test(self) {
        let mut reference = vec![0; self.dk_len];

        pbkdf2_hmac::<Sha1>(&self.password, &self.salt, self.iterations, &mut reference);
        self.compare(HmacSha1::prf(), "HmacSha1", &reference);

        pbkdf2_hmac::<Sha256>(&self.password, &self.salt, self.iterations, &mut reference);
        self.compare(HmacSha256::prf(), "HmacSha256", &reference);

        pbkdf2_hmac::<Sha512>(&self.password, &self.salt, self.iterations, &mut reference);
        self.compare(HmacSha512::prf(), "HmacSha512", &reference);

        // increment the counter.
        COUNTER.fetch_add(1, Relaxed);
    }

    // derive with the given PRF and compare the outputs.
    fn compare(&self, prf: Box<dyn Prf + Send + Sync>, name: &str, reference: &[u8]) {
        let kdf = Pbkdf2::new(prf).unwrap();

        let mut dk = vec![0; self.dk_len];
        kdf.derive(&mut dk, &self.password, &self.salt, self.iterations)
            .unwrap();

        let mut dk_parallel = vec![0; self.dk_len];
        kdf.derive_parallel(&mut dk_parallel, &self.password, &self.salt, self.iterations)
            .unwrap();

        // Compare the derived keys.
        if dk != reference || dk_parallel != reference {
            eprintln!("Error Report:");
            eprintln!("PRF: {}", name);
            eprintln!("Password: {}", self.password.encode_hex::<String>());
            eprintln!("Salt: {}", self.salt.encode_hex::<String>());
            eprintln!("Iterations: {}", self.iterations);
            eprintln!("Outputs:");
            eprintln!("Kdf: {}", dk.encode_hex::<String>());
            eprintln!("Kdf (parallel): {}", dk_parallel.encode_hex::<String>());
            eprintln!("Reference: {}", reference.encode_hex::<String>());
            panic!("Exiting. Please save this error information.");
        }
    }
}

fn main() {
    // get the threads from the NUM_THREADS enviroment var.
    let threads_str = env::var("NUM_THREADS").unwrap_or(num_cpus::get().to_string());
    let threads = usize::from_str(&threads_str).expect("Invalid value of NUM_THREADS");

    // load the enviroment limit from the VECTOR_LIMIT env var.
    let limit_str = env::var("VECTOR_LIMIT").unwrap_or(264.to_string());
    let limit = usize::from_str(&limit_str).expect("Invalid value of VECTOR_LIMIT");

    // fuzz the threads.
    for _ in 0..threads {
        thread::spawn(move || {
            let mut rng = rand::thread_rng();
            loop {
                Pbkdf2Vector::random(limit, &mut rng).test();
            }
        });
    }

    // Show the progress of fuzzing.
    println!(
        "Spraying Fuzz [Num Of Threads = {}, Vector Limit = {} bytes]...",
        threads, limit
    );
    loop {
        thread::sleep(Duration::from_secs(5));
        println!("Performed {} tests...", COUNTER.load(Relaxed));
    }
}
