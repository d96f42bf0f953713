mod secure_label;

pub use secure_label::{SecureLabelGenerator, LABEL_LEN};
