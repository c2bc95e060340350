use ss58_address::{
    compact_to_native, encoding, mirror, native_to_text, ParseError, Ss58Address,
};
use ss58_protocol::{
    constants::{COMPACT_ID_LEN, NATIVE_ACCOUNT_LEN},
    CompactId, NativeAccount,
};

use crate::Network;

pub(crate) fn inspect_compact(compact: &CompactId, network: &Network) {
    let account = mirror::embed(compact);

    eprintln!("EVM address");
    eprintln!(" - Address: {}", compact);
    eprintln!(" - Mirror account: {}", hex::encode(account.as_bytes()));
    eprintln!(
        " - Mirror SS58 address ({}): {}",
        network.deployment,
        compact_to_native(compact, network.prefix)
    );
}

pub(crate) fn inspect_native(account: &NativeAccount, network: &Network) {
    eprintln!("Native account");
    eprintln!(
        " - SS58 address ({}): {}",
        network.deployment,
        native_to_text(account, network.prefix)
    );
    inspect_mirror(account);
}

/// Returns `false` if the string cannot be used as an address on `network`.
pub(crate) fn inspect_encoded(s: &str, network: &Network) -> bool {
    let addr = match s.parse::<Ss58Address>() {
        Ok(addr) => addr,
        Err(ParseError::InvalidLength(_)) if inspect_short_payload(s) => return false,
        Err(e) => {
            eprintln!("String is not a valid SS58 address: {}", e);
            eprintln!("{}", hint(&e, network));
            return false;
        }
    };

    eprintln!("SS58 address");
    eprintln!(" - Network prefix: {}", addr.prefix());
    eprintln!(" - Account: {}", addr.account());

    match addr.ensure_network(network.prefix) {
        Ok(addr) => {
            inspect_mirror(addr.account());
            true
        }
        Err(e) => {
            eprintln!("{}", hint(&e, network));
            false
        }
    }
}

fn inspect_mirror(account: &NativeAccount) {
    match mirror::extract(account) {
        Ok(compact) => eprintln!(" - Mirror of EVM address: {}", compact),
        Err(_) => {
            eprintln!(" - Not the mirror of an EVM address.");
            eprintln!("   This is most likely the public key of a coldkey or hotkey.");
        }
    }
}

/// Describes valid SS58 strings that do not carry a native account.
fn inspect_short_payload(s: &str) -> bool {
    let (prefix, payload) = match encoding::decode(s) {
        Ok(decoded) => decoded,
        Err(_) => return false,
    };

    eprintln!("SS58 string with a {}-byte payload", payload.len());
    eprintln!(" - Network prefix: {}", prefix);
    eprintln!(" - Payload: {}", hex::encode(&payload));
    match payload.len() {
        1 | 2 | 4 | 8 => eprintln!("This is an account index, not an account address."),
        33 => eprintln!("This is a compressed public key, not an account address."),
        _ => (),
    }
    true
}

fn hint(e: &ParseError, network: &Network) -> String {
    match e {
        ParseError::InvalidCharacter { character, .. } => format!(
            "Hint: {:?} is not used in SS58 addresses. If you pasted a hex address, it must \
             be exactly {} bytes (an EVM address) or {} bytes (a native account).",
            character, COMPACT_ID_LEN, NATIVE_ACCOUNT_LEN
        ),
        ParseError::InvalidLength(_) | ParseError::InvalidPrefix(_) => {
            "Hint: The address is truncated or corrupted. Copy it again from its source.".into()
        }
        ParseError::ChecksumMismatch => {
            "Hint: The address contains a typo. Copy it again from its source.".into()
        }
        ParseError::WrongNetwork { expected, actual } => format!(
            "Hint: This address is for network prefix {}, but expected prefix {}{}. Use \
             --prefix {} to inspect it anyway.",
            actual,
            expected,
            if *expected == network.deployment.ss58_prefix() {
                format!(" ({})", network.deployment)
            } else {
                String::new()
            },
            actual
        ),
    }
}
