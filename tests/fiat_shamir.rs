use num_bigint::BigUint;
use rand::rngs::OsRng;

use sigma_zkp::test_utils::test_group;
use sigma_zkp::{
    AndComposition, Challenge, DhTupleStatement, Error, Nizk, PrimeOrderGroup, RandomOracle,
    SchnorrGroup, SigmaProtocol, SigmaProtocolSimulator,
};

const T: usize = 16;

fn dlog_statement(witness: &BigUint) -> DhTupleStatement<SchnorrGroup> {
    let group = test_group();
    let g = group.generator();
    let h = group.exponentiate(&g, witness);
    DhTupleStatement::new(group, vec![g], vec![h], T).unwrap()
}

#[test]
fn proof_roundtrip() {
    let mut rng = OsRng;
    let witness = BigUint::from(3011u32);
    let nizk = Nizk::new(dlog_statement(&witness), b"roundtrip test");

    let proof = nizk.prove(&witness, &mut rng).unwrap();
    nizk.verify(&proof).unwrap();
}

#[test]
fn proof_roundtrip_with_empty_context() {
    let mut rng = OsRng;
    let witness = BigUint::from(3011u32);
    let nizk = Nizk::new(dlog_statement(&witness), b"");

    let proof = nizk.prove(&witness, &mut rng).unwrap();
    nizk.verify(&proof).unwrap();
}

#[test]
fn proof_roundtrip_over_a_composition() {
    let mut rng = OsRng;
    let witnesses = vec![BigUint::from(17u32), BigUint::from(5002u32)];
    let statements = witnesses.iter().map(dlog_statement).collect();
    let nizk = Nizk::new(AndComposition::new(statements).unwrap(), b"and proof");

    let proof = nizk.prove(&witnesses, &mut rng).unwrap();
    nizk.verify(&proof).unwrap();
}

#[test]
fn wrong_witness_yields_a_rejected_proof() {
    let mut rng = OsRng;
    let nizk = Nizk::new(dlog_statement(&BigUint::from(3011u32)), b"ctx");

    let proof = nizk.prove(&BigUint::from(3012u32), &mut rng).unwrap();
    assert!(matches!(
        nizk.verify(&proof),
        Err(Error::VerificationFailure)
    ));
}

#[test]
fn tampered_challenge_is_a_cheat_attempt() {
    let mut rng = OsRng;
    let witness = BigUint::from(3011u32);
    let nizk = Nizk::new(dlog_statement(&witness), b"ctx");

    let mut proof = nizk.prove(&witness, &mut rng).unwrap();
    proof.challenge[0] ^= 0x01;
    assert!(matches!(nizk.verify(&proof), Err(Error::CheatAttempt(_))));
}

#[test]
fn truncated_challenge_is_a_cheat_attempt() {
    let mut rng = OsRng;
    let witness = BigUint::from(3011u32);
    let nizk = Nizk::new(dlog_statement(&witness), b"ctx");

    let mut proof = nizk.prove(&witness, &mut rng).unwrap();
    proof.challenge.pop();
    assert!(matches!(nizk.verify(&proof), Err(Error::CheatAttempt(_))));
}

#[test]
fn context_binds_the_proof() {
    let mut rng = OsRng;
    let witness = BigUint::from(3011u32);
    let prover_side = Nizk::new(dlog_statement(&witness), b"application A");
    let verifier_side = Nizk::new(dlog_statement(&witness), b"application B");

    let proof = prover_side.prove(&witness, &mut rng).unwrap();
    assert!(matches!(
        verifier_side.verify(&proof),
        Err(Error::CheatAttempt(_))
    ));
}

/// Oracle that always answers the same bytes, so a forgery test can pick a
/// challenge known to differ from the oracle output.
struct FixedOracle;

impl RandomOracle for FixedOracle {
    fn compute(&self, _input: &[u8], output_len: usize) -> Vec<u8> {
        vec![0xa5; output_len]
    }
}

#[test]
fn simulated_transcript_does_not_forge_a_proof() {
    let mut rng = OsRng;
    let statement = dlog_statement(&BigUint::from(3011u32));
    let nizk = Nizk::with_oracle(statement.clone(), FixedOracle, b"ctx");

    // A cheater without the witness builds an accepting interactive
    // transcript for a challenge of its own choosing and packages it as a
    // non-interactive proof. The challenge cannot match the oracle output.
    let challenge = Challenge::from_bytes([0x00, 0x01]);
    let response = statement.simulate_response(&mut rng);
    let commitment = statement.simulate_commitment(&challenge, &response).unwrap();
    statement
        .verifier(&commitment, &challenge, &response)
        .unwrap();

    let forged = sigma_zkp::FiatShamirProof {
        commitment: statement.commitment_to_message(&commitment),
        challenge: challenge.as_bytes().to_vec(),
        response: statement.response_to_message(&response),
    };
    assert!(matches!(nizk.verify(&forged), Err(Error::CheatAttempt(_))));
}
