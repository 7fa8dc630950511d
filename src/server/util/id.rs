use rand::Rng;

/// Generates a 24 character lowercase hex id from 12 random bytes.
pub fn new_id() -> String {
    let bytes: [u8; 12] = rand::rng().random();
    hex::encode(bytes)
}

/// Generates the id of a video consultation room.
pub fn new_room_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Generates a six digit one-time code.
pub fn new_otp_code() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}
