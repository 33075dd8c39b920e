use num_bigint::BigUint;
use rand::rngs::OsRng;

use sigma_zkp::test_utils::test_group;
use sigma_zkp::{
    AndComposition, Challenge, DhTupleStatement, Error, OrBranch, OrComposition, OrWitness,
    PrimeOrderGroup, SchnorrGroup, SigmaProtocol, SigmaProtocolSimulator,
};

const T: usize = 16;

fn dlog_statement(witness: &BigUint, bits: usize) -> DhTupleStatement<SchnorrGroup> {
    let group = test_group();
    let g = group.generator();
    let h = group.exponentiate(&g, witness);
    DhTupleStatement::new(group, vec![g], vec![h], bits).unwrap()
}

#[test]
fn and_composition_completeness() {
    let mut rng = OsRng;
    let witnesses = vec![
        BigUint::from(101u32),
        BigUint::from(2029u32),
        BigUint::from(4999u32),
    ];
    let statements = witnesses.iter().map(|w| dlog_statement(w, T)).collect();
    let composition = AndComposition::new(statements).unwrap();

    let (commitment, state) = composition.prover_commit(&witnesses, &mut rng).unwrap();
    let challenge = Challenge::sample(T, &mut rng).unwrap();
    let response = composition.prover_response(state, &challenge).unwrap();
    composition
        .verifier(&commitment, &challenge, &response)
        .unwrap();
}

#[test]
fn and_composition_fails_if_one_witness_is_wrong() {
    let mut rng = OsRng;
    let witnesses = vec![BigUint::from(101u32), BigUint::from(2029u32)];
    let statements = witnesses.iter().map(|w| dlog_statement(w, T)).collect();
    let composition = AndComposition::new(statements).unwrap();

    // Correct first witness, wrong second one.
    let claimed = vec![BigUint::from(101u32), BigUint::from(2030u32)];
    let (commitment, state) = composition.prover_commit(&claimed, &mut rng).unwrap();
    let challenge = Challenge::sample(T, &mut rng).unwrap();
    let response = composition.prover_response(state, &challenge).unwrap();
    assert!(matches!(
        composition.verifier(&commitment, &challenge, &response),
        Err(Error::VerificationFailure)
    ));
}

#[test]
fn and_composition_construction_preconditions() {
    assert!(matches!(
        AndComposition::<DhTupleStatement<SchnorrGroup>>::new(vec![]),
        Err(Error::InvalidInput(_))
    ));

    let mismatched = vec![
        dlog_statement(&BigUint::from(3u32), 16),
        dlog_statement(&BigUint::from(5u32), 24),
    ];
    assert!(matches!(
        AndComposition::new(mismatched),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn and_composition_rejects_arity_mismatches() {
    let mut rng = OsRng;
    let witnesses = vec![BigUint::from(101u32), BigUint::from(2029u32)];
    let statements = witnesses.iter().map(|w| dlog_statement(w, T)).collect();
    let composition = AndComposition::new(statements).unwrap();

    // One witness for a two-statement composition.
    assert!(matches!(
        composition.prover_commit(&vec![BigUint::from(101u32)], &mut rng),
        Err(Error::InvalidInput(_))
    ));

    // Commitment with a dropped component.
    let (mut commitment, state) = composition.prover_commit(&witnesses, &mut rng).unwrap();
    commitment.pop();
    let challenge = Challenge::sample(T, &mut rng).unwrap();
    let response = composition.prover_response(state, &challenge).unwrap();
    assert!(matches!(
        composition.verifier(&commitment, &challenge, &response),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn and_composition_simulator_accepts() {
    let mut rng = OsRng;
    let statements = vec![
        dlog_statement(&BigUint::from(101u32), T),
        dlog_statement(&BigUint::from(2029u32), T),
    ];
    let composition = AndComposition::new(statements).unwrap();

    let (commitment, challenge, response) = composition.simulate_transcript(&mut rng).unwrap();
    composition
        .verifier(&commitment, &challenge, &response)
        .unwrap();
}

#[test]
fn or_composition_left_branch_completeness() {
    let mut rng = OsRng;
    let known = BigUint::from(77u32);
    let left = dlog_statement(&known, T);
    let right = dlog_statement(&BigUint::from(1234u32), T);
    let composition = OrComposition::new(left, right).unwrap();

    let witness = OrWitness {
        branch: OrBranch::Left,
        witness: known,
    };
    let (commitment, state) = composition.prover_commit(&witness, &mut rng).unwrap();
    let challenge = Challenge::sample(T, &mut rng).unwrap();
    let response = composition.prover_response(state, &challenge).unwrap();
    composition
        .verifier(&commitment, &challenge, &response)
        .unwrap();
}

#[test]
fn or_composition_right_branch_completeness() {
    let mut rng = OsRng;
    let known = BigUint::from(4242u32);
    let left = dlog_statement(&BigUint::from(9u32), T);
    let right = dlog_statement(&known, T);
    let composition = OrComposition::new(left, right).unwrap();

    let witness = OrWitness {
        branch: OrBranch::Right,
        witness: known,
    };
    let (commitment, state) = composition.prover_commit(&witness, &mut rng).unwrap();
    let challenge = Challenge::sample(T, &mut rng).unwrap();
    let response = composition.prover_response(state, &challenge).unwrap();

    // Round-trip both messages through their wire form, as a verifier on the
    // other end of a channel would see them.
    let commitment = composition
        .commitment_from_message(&composition.commitment_to_message(&commitment))
        .unwrap();
    let response = composition
        .response_from_message(&composition.response_to_message(&response))
        .unwrap();
    composition
        .verifier(&commitment, &challenge, &response)
        .unwrap();
}

#[test]
fn or_composition_fails_without_either_witness() {
    let mut rng = OsRng;
    let left = dlog_statement(&BigUint::from(9u32), T);
    let right = dlog_statement(&BigUint::from(4242u32), T);
    let composition = OrComposition::new(left, right).unwrap();

    let witness = OrWitness {
        branch: OrBranch::Left,
        witness: BigUint::from(10u32),
    };
    let (commitment, state) = composition.prover_commit(&witness, &mut rng).unwrap();
    let challenge = Challenge::sample(T, &mut rng).unwrap();
    let response = composition.prover_response(state, &challenge).unwrap();
    assert!(matches!(
        composition.verifier(&commitment, &challenge, &response),
        Err(Error::VerificationFailure)
    ));
}

#[test]
fn or_composition_rejects_mismatched_soundness() {
    let left = dlog_statement(&BigUint::from(9u32), 16);
    let right = dlog_statement(&BigUint::from(11u32), 24);
    assert!(matches!(
        OrComposition::new(left, right),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn or_composition_simulator_accepts() {
    let mut rng = OsRng;
    let left = dlog_statement(&BigUint::from(9u32), T);
    let right = dlog_statement(&BigUint::from(4242u32), T);
    let composition = OrComposition::new(left, right).unwrap();

    let (commitment, challenge, response) = composition.simulate_transcript(&mut rng).unwrap();
    composition
        .verifier(&commitment, &challenge, &response)
        .unwrap();
}
