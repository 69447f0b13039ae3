use super::identifier::format_identifier;
use super::*;
use crate::error::InputError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

fn sizes(inputs: usize, paths: usize, users: usize) -> Result<PoolSizes, String> {
    let non_zero = |value: usize| {
        NonZeroUsize::new(value).ok_or_else(|| "pool size must be positive".to_owned())
    };
    Ok(PoolSizes {
        inputs: non_zero(inputs)?,
        paths: non_zero(paths)?,
        users: non_zero(users)?,
    })
}

fn hex_nibble(id: &str, position: usize) -> Result<u8, String> {
    let ch = id
        .chars()
        .nth(position)
        .ok_or_else(|| format!("identifier '{}' too short", id))?;
    ch.to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or_else(|| format!("non-hex character '{}' in '{}'", ch, id))
}

fn check_layout(id: &str) -> Result<(), String> {
    let groups: Vec<usize> = id.split('-').map(str::len).collect();
    if groups != [8, 4, 4, 4, 12] {
        return Err(format!("unexpected group layout in '{}'", id));
    }
    if id.chars().any(|ch| ch.is_ascii_uppercase()) {
        return Err(format!("expected lowercase hex in '{}'", id));
    }
    // xxxxxxxx-xxxx-Vxxx-Rxxx-xxxxxxxxxxxx
    if hex_nibble(id, 14)? != 4 {
        return Err(format!("version nibble is not 4 in '{}'", id));
    }
    if hex_nibble(id, 19)? & 0b1100 != 0b1000 {
        return Err(format!("variant bits are not 10 in '{}'", id));
    }
    Ok(())
}

#[test]
fn generate_inputs_returns_requested_count() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(7);
    let inputs = generate_inputs(sizes(250, 20, 5)?, &mut rng)
        .map_err(|err| format!("generate failed: {}", err))?;

    if inputs.len() != 250 {
        return Err(format!("expected 250 inputs, got {}", inputs.len()));
    }
    for input in &inputs {
        if !Method::ALL.contains(&input.method) {
            return Err(format!("unexpected method {:?}", input.method));
        }
        if input.user.is_empty() || input.path.is_empty() {
            return Err("expected non-empty user and path".to_owned());
        }
    }
    Ok(())
}

#[test]
fn generated_inputs_sample_from_bounded_pools() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(11);
    let inputs = generate_inputs(sizes(500, 3, 2)?, &mut rng)
        .map_err(|err| format!("generate failed: {}", err))?;

    let users: BTreeSet<&str> = inputs.iter().map(|input| input.user.as_str()).collect();
    let paths: BTreeSet<&[String]> = inputs.iter().map(|input| input.path.as_slice()).collect();
    if users.len() > 2 || paths.len() > 3 {
        return Err(format!(
            "expected at most 2 users and 3 paths, got {} and {}",
            users.len(),
            paths.len()
        ));
    }

    for input in &inputs {
        match input.path.as_slice() {
            [prefix, id] if prefix == "resources" => check_layout(id)?,
            other => return Err(format!("unexpected path {:?}", other)),
        }
        check_layout(&input.user)?;
    }
    Ok(())
}

#[test]
fn random_identifiers_use_version_four_layout() -> Result<(), String> {
    for _ in 0..64 {
        let id = random_identifier().map_err(|err| format!("identifier failed: {}", err))?;
        check_layout(&id)?;
    }
    Ok(())
}

#[test]
fn random_identifiers_are_distinct() -> Result<(), String> {
    let first = random_identifier().map_err(|err| format!("identifier failed: {}", err))?;
    let second = random_identifier().map_err(|err| format!("identifier failed: {}", err))?;
    if first == second {
        return Err(format!("two identifiers collided: {}", first));
    }
    Ok(())
}

#[test]
fn format_identifier_overrides_version_and_variant_bits() -> Result<(), String> {
    let id = format_identifier([0xff; 16]);
    if id != "ffffffff-ffff-4fff-bfff-ffffffffffff" {
        return Err(format!("unexpected identifier {}", id));
    }
    let id = format_identifier([0x00; 16]);
    if id != "00000000-0000-4000-8000-000000000000" {
        return Err(format!("unexpected identifier {}", id));
    }
    Ok(())
}

#[test]
fn request_body_wraps_input() -> Result<(), String> {
    let input = SyntheticInput {
        method: Method::Delete,
        path: vec!["resources".to_owned(), "abc".to_owned()],
        user: "alice".to_owned(),
    };
    let body = serde_json::to_value(DecisionRequest { input: &input })
        .map_err(|err| format!("serialize failed: {}", err))?;
    let expected = serde_json::json!({
        "input": {
            "method": "DELETE",
            "path": ["resources", "abc"],
            "user": "alice",
        }
    });
    if body != expected {
        return Err(format!("unexpected body {}", body));
    }
    Ok(())
}

#[test]
fn pool_rejects_empty_inputs() -> Result<(), String> {
    match InputPool::new(Vec::new()) {
        Err(InputError::EmptyPool) => Ok(()),
        Err(err) => Err(format!("unexpected error {}", err)),
        Ok(_) => Err("expected empty pool to be rejected".to_owned()),
    }
}

#[test]
fn pool_pick_returns_member() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(3);
    let pool = InputPool::generate(sizes(10, 2, 2)?, &mut rng)
        .map_err(|err| format!("generate failed: {}", err))?;
    for _ in 0..32 {
        let picked = pool
            .pick(&mut rng)
            .ok_or_else(|| "pick returned nothing".to_owned())?;
        if !pool.as_slice().contains(picked) {
            return Err("picked input is not part of the pool".to_owned());
        }
    }
    Ok(())
}
