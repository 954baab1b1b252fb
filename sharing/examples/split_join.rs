use sampling::source::Source;
use sharing::{Combiner, Dealer, ShareError};

fn main() -> Result<(), ShareError> {
    let secret: &[u8] = b"correct horse battery staple!!";
    let parts: usize = 3;

    let mut dealer: Dealer = Dealer::new(secret, parts, Source::from_os())?;
    let shares: Vec<Vec<u8>> = (0..5)
        .map(|_| dealer.share_bytes())
        .collect::<Result<_, _>>()?;
    println!(
        "split {} bytes into {} shares of {} bytes (threshold {parts}, p = 2^{} - {})",
        secret.len(),
        shares.len(),
        shares[0].len(),
        dealer.shape().mod_bits(),
        dealer.shape().word(),
    );

    let mut combiner: Combiner = Combiner::new(secret.len(), parts)?;
    for share in shares.iter().rev() {
        if !combiner.add_bytes(share)? {
            println!("threshold reached, ignoring remaining shares");
            break;
        }
    }
    let recovered: Vec<u8> = combiner.secret()?;
    println!("recovered: {}", String::from_utf8_lossy(&recovered));
    assert_eq!(recovered, secret);
    Ok(())
}
