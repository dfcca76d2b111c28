//! Byte builders for parser unit tests

/// Header bytes: 2-byte preamble, identity, zero preamble, length, codec, count
pub fn header_bytes(imei: &str, field_length: u32, codec_id: u8, record_count: u8) -> Vec<u8> {
    let mut data = vec![0x00, 0x0F];
    data.extend_from_slice(imei.as_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&field_length.to_be_bytes());
    data.push(codec_id);
    data.push(record_count);
    data
}

/// Record bytes with altitude 34, angle 73, 11 satellites and speed 0
pub fn record_bytes(
    timestamp_ms: u64,
    priority: u8,
    longitude_raw: u32,
    latitude_raw: u32,
    io_element: &[u8],
) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&timestamp_ms.to_be_bytes());
    data.push(priority);
    data.extend_from_slice(&longitude_raw.to_be_bytes());
    data.extend_from_slice(&latitude_raw.to_be_bytes());
    data.extend_from_slice(&34u16.to_be_bytes());
    data.extend_from_slice(&73u16.to_be_bytes());
    data.push(11);
    data.extend_from_slice(&0u16.to_be_bytes());
    data.extend_from_slice(io_element);
    data
}

/// Builder for IO element bytes, one group per width class
#[derive(Default)]
pub struct IoElementBytes {
    event_io_id: u16,
    total_io: u16,
    n1: Vec<(u16, u8)>,
    n2: Vec<(u16, u16)>,
    n4: Vec<(u16, u32)>,
    n8: Vec<(u16, u64)>,
    nx: Vec<(u16, Vec<u8>)>,
}

impl IoElementBytes {
    pub fn new(event_io_id: u16, total_io: u16) -> Self {
        Self {
            event_io_id,
            total_io,
            ..Self::default()
        }
    }

    pub fn n1(mut self, id: u16, value: u8) -> Self {
        self.n1.push((id, value));
        self
    }

    pub fn n2(mut self, id: u16, value: u16) -> Self {
        self.n2.push((id, value));
        self
    }

    pub fn n4(mut self, id: u16, value: u32) -> Self {
        self.n4.push((id, value));
        self
    }

    pub fn n8(mut self, id: u16, value: u64) -> Self {
        self.n8.push((id, value));
        self
    }

    pub fn nx(mut self, id: u16, value: &[u8]) -> Self {
        self.nx.push((id, value.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&self.event_io_id.to_be_bytes());
        data.extend_from_slice(&self.total_io.to_be_bytes());

        data.extend_from_slice(&(self.n1.len() as u16).to_be_bytes());
        for (id, value) in &self.n1 {
            data.extend_from_slice(&id.to_be_bytes());
            data.push(*value);
        }
        data.extend_from_slice(&(self.n2.len() as u16).to_be_bytes());
        for (id, value) in &self.n2 {
            data.extend_from_slice(&id.to_be_bytes());
            data.extend_from_slice(&value.to_be_bytes());
        }
        data.extend_from_slice(&(self.n4.len() as u16).to_be_bytes());
        for (id, value) in &self.n4 {
            data.extend_from_slice(&id.to_be_bytes());
            data.extend_from_slice(&value.to_be_bytes());
        }
        data.extend_from_slice(&(self.n8.len() as u16).to_be_bytes());
        for (id, value) in &self.n8 {
            data.extend_from_slice(&id.to_be_bytes());
            data.extend_from_slice(&value.to_be_bytes());
        }
        data.extend_from_slice(&(self.nx.len() as u16).to_be_bytes());
        for (id, value) in &self.nx {
            data.extend_from_slice(&id.to_be_bytes());
            data.extend_from_slice(&(value.len() as u16).to_be_bytes());
            data.extend_from_slice(value);
        }
        data
    }
}

/// Complete frame around the given record bodies, with a correct field-length
pub fn frame_bytes(imei: &str, codec_id: u8, records: &[Vec<u8>], checksum: [u8; 4]) -> Vec<u8> {
    let body_len: usize = records.iter().map(Vec::len).sum();
    // codec id + record count + records + record count echo
    let field_length = (body_len + 3) as u32;

    let mut data = header_bytes(imei, field_length, codec_id, records.len() as u8);
    for record in records {
        data.extend_from_slice(record);
    }
    data.push(records.len() as u8);
    data.extend_from_slice(&checksum);
    data
}
