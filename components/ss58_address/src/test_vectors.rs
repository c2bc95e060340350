//! Reference encodings for SS58 addresses and EVM mirror accounts.
//!
//! These are shared by the tests in this crate and exported under the
//! `test-dependencies` feature for reuse by other codec implementations.

pub struct TestVector {
    pub prefix: u16,
    pub account: [u8; 32],
    /// The EVM address this account mirrors, if it is a mirror account.
    pub compact: Option<[u8; 20]>,
    pub encoded: &'static str,
}

pub const TEST_VECTORS: &[TestVector] = &[
    // Mirror of 0x1111…1111 on the Substrate prefix.
    TestVector {
        prefix: 42,
        account: [
            0x65, 0x76, 0x6d, 0x3a, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: Some([
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11,
        ]),
        encoded: "5EMjsczPbUMmd1jtRoHJESkgdGMM3peHZ89DuNmKqib75rK4",
    },
    TestVector {
        prefix: 0,
        account: [
            0x65, 0x76, 0x6d, 0x3a, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: Some([
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11,
        ]),
        encoded: "13J31xFTTFdF4YkQPSLJNbaqUtLzk8CRdcsi4fkgPocdGKex",
    },
    // Mirror of the zero EVM address.
    TestVector {
        prefix: 42,
        account: [
            0x65, 0x76, 0x6d, 0x3a, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: Some([
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ]),
        encoded: "5EMjsczLB8VLkyWNp8b9cFK5W5SuezibcCFdgHd9ZxYc5LYQ",
    },
    TestVector {
        prefix: 42,
        account: [
            0x65, 0x76, 0x6d, 0x3a, 0x74, 0x2d, 0x35, 0xcc,
            0x66, 0x34, 0xc0, 0x53, 0x29, 0x25, 0xa3, 0xb8,
            0x44, 0xbc, 0x45, 0x4e, 0x44, 0x38, 0xf4, 0x4e,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: Some([
            0x74, 0x2d, 0x35, 0xcc, 0x66, 0x34, 0xc0, 0x53,
            0x29, 0x25, 0xa3, 0xb8, 0x44, 0xbc, 0x45, 0x4e,
            0x44, 0x38, 0xf4, 0x4e,
        ]),
        encoded: "5EMjsczjTHtfzdSvh6Y72h9zwmm4mbZddGvi5f33LEBmjJYy",
    },
    // Two-byte prefixes.
    TestVector {
        prefix: 64,
        account: [
            0x65, 0x76, 0x6d, 0x3a, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: Some([
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11,
        ]),
        encoded: "cEXsEn2pYTjSjihvumAzjjtBXeH18mVi8npYg2ntw1qJu1Tb5",
    },
    TestVector {
        prefix: 1284,
        account: [
            0x65, 0x76, 0x6d, 0x3a, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: Some([
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11,
        ]),
        encoded: "VdspZVMRMZyMLkbUtHPGed2Gu6SbTHex3Pg19cZXGLbxuiJi8",
    },
    TestVector {
        prefix: 16383,
        account: [
            0x65, 0x76, 0x6d, 0x3a, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: Some([
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x11, 0x11,
        ]),
        encoded: "yNXd6mtRPgXfJkwdkUt7aP9sihE488LPSVoPvPywP8CLAyDRF",
    },
    // The sr25519 public key of `//Alice`.
    TestVector {
        prefix: 42,
        account: [
            0xd4, 0x35, 0x93, 0xc7, 0x15, 0xfd, 0xd3, 0x1c,
            0x61, 0x14, 0x1a, 0xbd, 0x04, 0xa9, 0x9f, 0xd6,
            0x82, 0x2c, 0x85, 0x58, 0x85, 0x4c, 0xcd, 0xe3,
            0x9a, 0x56, 0x84, 0xe7, 0xa5, 0x6d, 0xa2, 0x7d,
        ],
        compact: None,
        encoded: "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
    },
    TestVector {
        prefix: 0,
        account: [
            0xd4, 0x35, 0x93, 0xc7, 0x15, 0xfd, 0xd3, 0x1c,
            0x61, 0x14, 0x1a, 0xbd, 0x04, 0xa9, 0x9f, 0xd6,
            0x82, 0x2c, 0x85, 0x58, 0x85, 0x4c, 0xcd, 0xe3,
            0x9a, 0x56, 0x84, 0xe7, 0xa5, 0x6d, 0xa2, 0x7d,
        ],
        compact: None,
        encoded: "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5",
    },
    TestVector {
        prefix: 2,
        account: [
            0xd4, 0x35, 0x93, 0xc7, 0x15, 0xfd, 0xd3, 0x1c,
            0x61, 0x14, 0x1a, 0xbd, 0x04, 0xa9, 0x9f, 0xd6,
            0x82, 0x2c, 0x85, 0x58, 0x85, 0x4c, 0xcd, 0xe3,
            0x9a, 0x56, 0x84, 0xe7, 0xa5, 0x6d, 0xa2, 0x7d,
        ],
        compact: None,
        encoded: "HNZata7iMYWmk5RvZRTiAsSDhV8366zq2YGb3tLH5Upf74F",
    },
    // The zero account.
    TestVector {
        prefix: 0,
        account: [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: None,
        encoded: "111111111111111111111111111111111HC1",
    },
    TestVector {
        prefix: 42,
        account: [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        compact: None,
        encoded: "5C4hrfjw9DjXZTzV3MwzrrAr9P1MJhSrvWGWqi1eSuyUpnhM",
    },
];
