use std::thread;

use num_bigint::BigUint;
use rand::rngs::OsRng;

use sigma_zkp::commitment::PedersenOpening;
use sigma_zkp::test_utils::{test_group, LocalChannel};
use sigma_zkp::{
    Channel, ChannelMessage, CommitmentScheme, DhTupleStatement, Error, PedersenCommitment,
    PrimeOrderGroup, SchnorrGroup, ZkProver, ZkVerifier,
};

const T: usize = 16;

fn dlog_statement(witness: &BigUint) -> DhTupleStatement<SchnorrGroup> {
    let group = test_group();
    let g = group.generator();
    let h = group.exponentiate(&g, witness);
    DhTupleStatement::new(group, vec![g], vec![h], T).unwrap()
}

fn pedersen() -> PedersenCommitment<SchnorrGroup> {
    let group = test_group();
    let h = group.exponentiate(&group.generator(), &BigUint::from(813u32));
    PedersenCommitment::new(group, h)
}

#[test]
fn five_step_session_accepts() {
    let witness = BigUint::from(1789u32);
    let statement = dlog_statement(&witness);
    let (mut prover_channel, mut verifier_channel) = LocalChannel::pair();

    let prover = ZkProver::new(statement.clone(), pedersen());
    let handle = thread::spawn(move || prover.prove(&mut prover_channel, &witness, &mut OsRng));

    let verifier = ZkVerifier::new(statement, pedersen());
    verifier.verify(&mut verifier_channel, &mut OsRng).unwrap();
    handle.join().unwrap().unwrap();
}

#[test]
fn session_with_wrong_witness_is_rejected() {
    let statement = dlog_statement(&BigUint::from(1789u32));
    let (mut prover_channel, mut verifier_channel) = LocalChannel::pair();

    let prover = ZkProver::new(statement.clone(), pedersen());
    let handle = thread::spawn(move || {
        prover.prove(&mut prover_channel, &BigUint::from(1790u32), &mut OsRng)
    });

    let verifier = ZkVerifier::new(statement, pedersen());
    assert!(matches!(
        verifier.verify(&mut verifier_channel, &mut OsRng),
        Err(Error::VerificationFailure)
    ));
    // The prover itself ran the session to completion.
    handle.join().unwrap().unwrap();
}

#[test]
fn forged_decommitment_is_a_cheat_attempt() {
    let witness = BigUint::from(1789u32);
    let statement = dlog_statement(&witness);
    let scheme = pedersen();
    let (mut prover_channel, mut verifier_channel) = LocalChannel::pair();

    // A dishonest verifier commits to one challenge, then reveals another.
    // The channel is buffered, so the whole script can be queued up front.
    let committed = [0x1au8, 0x2b];
    let (commitment, opening) = scheme.commit(&committed, &mut OsRng).unwrap();
    verifier_channel
        .send(ChannelMessage::Commitment(
            scheme.commitment_to_bytes(&commitment),
        ))
        .unwrap();
    let forged = PedersenOpening {
        value: vec![0x1a, 0x2c],
        randomness: opening.randomness.clone(),
    };
    verifier_channel
        .send(ChannelMessage::Decommitment(scheme.opening_to_bytes(&forged)))
        .unwrap();

    let prover = ZkProver::new(statement, scheme);
    assert!(matches!(
        prover.prove(&mut prover_channel, &witness, &mut OsRng),
        Err(Error::CheatAttempt(_))
    ));
}

#[test]
fn same_residue_decommitment_is_rejected() {
    let witness = BigUint::from(1789u32);
    let statement = dlog_statement(&witness);
    let scheme = pedersen();
    let (mut prover_channel, mut verifier_channel) = LocalChannel::pair();

    // The group order is 5003. A dishonest verifier commits to challenge 1,
    // waits for the prover's first message, then reveals 1 + 5003 with the
    // original randomness. Both encodings are two bytes, so the length check
    // alone cannot catch the swap; the commitment opening must.
    let (commitment, opening) = scheme.commit(&[0x00, 0x01], &mut OsRng).unwrap();
    verifier_channel
        .send(ChannelMessage::Commitment(
            scheme.commitment_to_bytes(&commitment),
        ))
        .unwrap();
    let equivocated = PedersenOpening {
        value: vec![0x13, 0x8c],
        randomness: opening.randomness.clone(),
    };
    verifier_channel
        .send(ChannelMessage::Decommitment(
            scheme.opening_to_bytes(&equivocated),
        ))
        .unwrap();

    let prover = ZkProver::new(statement, scheme);
    assert!(matches!(
        prover.prove(&mut prover_channel, &witness, &mut OsRng),
        Err(Error::CheatAttempt(_))
    ));
}

#[test]
fn out_of_order_message_is_a_cheat_attempt() {
    let witness = BigUint::from(1789u32);
    let statement = dlog_statement(&witness);
    let scheme = pedersen();
    let (mut prover_channel, mut verifier_channel) = LocalChannel::pair();

    // A decommitment arrives where a commitment is expected.
    verifier_channel
        .send(ChannelMessage::Decommitment(vec![0u8; 4]))
        .unwrap();

    let prover = ZkProver::new(statement, scheme);
    assert!(matches!(
        prover.prove(&mut prover_channel, &witness, &mut OsRng),
        Err(Error::CheatAttempt(_))
    ));
}

#[test]
fn hung_up_peer_is_a_communication_error() {
    let witness = BigUint::from(1789u32);
    let statement = dlog_statement(&witness);
    let (mut prover_channel, verifier_channel) = LocalChannel::pair();
    drop(verifier_channel);

    let prover = ZkProver::new(statement, pedersen());
    assert!(matches!(
        prover.prove(&mut prover_channel, &witness, &mut OsRng),
        Err(Error::Communication(_))
    ));
}
