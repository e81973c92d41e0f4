#![no_main]
use libfuzzer_sys::fuzz_target;

use multipart_buffer::FormData;

fuzz_target!(|data: &[u8]| {
    let form = FormData::parse("multipart/form-data; boundary=BOUNDARY", data.to_vec());

    for value in form.fields.values() {
        assert_eq!(value, value.trim());
    }
    for file in form.files.values() {
        assert!(file.data.len() <= data.len());
    }
});
