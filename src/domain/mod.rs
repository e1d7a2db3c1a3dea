pub mod clock;
pub mod fingerprint;
pub mod hasher;
pub mod receipt;
pub mod record;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fingerprint::{Fingerprint, FingerprintParseError, FINGERPRINT_LEN};
pub use hasher::{fingerprint, fingerprint_file, fingerprint_reader};
pub use receipt::{verify_path, NotarizationReceipt};
pub use record::NotarizationRecord;
