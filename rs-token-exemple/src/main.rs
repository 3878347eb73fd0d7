use rs_token_core::token::charset::CharacterClass;
use rs_token_core::token::generator;
use rs_token_core::token::request::TokenRequest;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One token per named class
    // The length is always explicit, there is no implicit default
    for class in CharacterClass::ALL {
        let mut request = TokenRequest::new(12);
        request.character_class = class;
        println!("{}: {}", class.tag(), generator::generate(&request)?);
    }

    // Unknown tags are not an error, they resolve to the full
    // alphanumeric class
    let mut request = TokenRequest::new(12);
    request.character_class = CharacterClass::from_tag("bogus-tag");
    println!("bogus-tag: {}", generator::generate(&request)?);

    // Extra characters extend the alphabet
    // Duplicates are kept and bias the draw toward the duplicated character
    let mut request = TokenRequest::new(16);
    request.character_class = CharacterClass::Number;
    request.extra_characters = "--".to_owned();
    println!("digits plus dashes: {}", generator::generate(&request)?);

    // A zero length is a valid request and produces an empty token
    let request = TokenRequest::new(0);
    println!("zero length: {:?}", generator::generate(&request)?);

    // Oversized lengths are rejected
    match generator::generate(&TokenRequest::new(generator::MAX_LENGTH + 1)) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Oversized request rejected: {}", e),
    }

    Ok(())
}
