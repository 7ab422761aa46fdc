use rlifepred::{
    ancestors_of_alive, ancestors_of_dead, shift_intersect, Board, Classification, Config, Error,
    Neighborhood, NeighborhoodSet, Side, State,
};
use std::error::Error as StdError;

#[test]
fn parse_examples() -> Result<(), Box<dyn StdError>> {
    assert_eq!("+++++++++".parse::<Neighborhood>()?.bits(), 0x000);
    assert_eq!("#########".parse::<Neighborhood>()?.bits(), 0x1ff);
    assert_eq!("++#++##++".parse::<Neighborhood>()?.bits(), 0x04c);
    assert_eq!(
        "####".parse::<Neighborhood>(),
        Err(Error::InvalidFormat(String::from("####")))
    );
    Ok(())
}

#[test]
fn matches_example() -> Result<(), Box<dyn StdError>> {
    let n: Neighborhood = "###/++#/#+#".parse()?;
    let k: Neighborhood = "+##/+##/###".parse()?;
    assert!(n.matches(k, 1, Side::SE)?);
    assert!(!n.matches(k, 1, Side::N)?);
    assert!(k.matches(n, 1, Side::NW)?);
    Ok(())
}

#[test]
fn set_of_full_neighborhood() -> Result<(), Box<dyn StdError>> {
    let mut set = NeighborhoodSet::new();
    set.add(Neighborhood::new(0x1ff)?);
    assert!(set.contains_bits(0x1ff)?);
    assert_eq!(set.contains_bits(0x200), Err(Error::OutOfRange(0x200)));
    Ok(())
}

#[test]
fn classification() {
    let alive = ancestors_of_alive();
    let dead = ancestors_of_dead();
    assert_eq!(alive.len(), 140);
    assert_eq!(dead.len(), 372);
    assert!(alive.iter().all(|nbhd| !dead.contains(nbhd)));
    assert_eq!(alive.len() + dead.len(), 512);
}

#[test]
fn shift_intersect_subsets() -> Result<(), Box<dyn StdError>> {
    let alive = ancestors_of_alive();
    let dead = ancestors_of_dead();
    for &side in Side::NEIGHBORS.iter() {
        let (left, right) = shift_intersect(&dead, &alive, side)?;
        assert!(left.iter().all(|l| dead.contains(l)));
        assert!(right.iter().all(|r| alive.contains(r)));
        let (right_back, left_back) = shift_intersect(&alive, &dead, side.opposite())?;
        assert_eq!(left, left_back);
        assert_eq!(right, right_back);
    }
    Ok(())
}

#[test]
fn center_side_is_rejected() {
    let set = ancestors_of_alive();
    let err = shift_intersect(&set, &set, Side::C).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "C is not a valid side for matching neighborhoods.");
}

#[test]
fn board_neighborhoods() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(8, 8);
    let mut board = config.board()?;
    for &(x, y) in &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        board.set(x, y, State::Alive)?;
    }
    let classification = config.classification()?;

    let alive = classification.ancestors_of_alive();
    let mut next = Board::new(8, 8)?;
    for y in 0..8 {
        for x in 0..8 {
            let nbhd = board.neighborhood(x, y)?;
            assert_eq!(
                board.next_state(x, y, &classification)?,
                State::from(alive.contains(nbhd))
            );
            next.set(x, y, board.next_state(x, y, &classification)?)?;
        }
    }
    assert_eq!(
        next.to_string(),
        "8x8\n\
         ++++++++\n\
         #+#+++++\n\
         +##+++++\n\
         +#++++++\n\
         ++++++++\n\
         ++++++++\n\
         ++++++++\n\
         ++++++++\n"
    );
    Ok(())
}

#[test]
fn neighboring_cells_match() -> Result<(), Box<dyn StdError>> {
    let board: Board = "8x8\n\
                        #+#+#+#+\n\
                        ++##++##\n\
                        ###+++#+\n\
                        +#+#+#+#\n\
                        ########\n\
                        ++++++++\n\
                        #++#++#+\n\
                        +#++#++#\n"
        .parse()?;
    for y in 1..7 {
        for x in 1..7 {
            let center = board.neighborhood(x, y)?;
            for &side in Side::NEIGHBORS.iter() {
                let (dy, dx) = side.offset();
                let nx = (x as isize + dx as isize) as usize;
                let ny = (y as isize + dy as isize) as usize;
                let other = board.neighborhood(nx, ny)?;
                assert!(center.matches(other, 1, side)?);
            }
        }
    }
    Ok(())
}

#[test]
fn other_rule() -> Result<(), Box<dyn StdError>> {
    let config = Config::default().set_rule_string("B36/S23");
    let highlife = config.classification()?;
    assert_ne!(highlife, Classification::conway());
    assert_eq!(highlife.ancestors_of_alive().len(), 168);
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn ser() -> Result<(), Box<dyn StdError>> {
    let set: NeighborhoodSet = ["+++ +++ +++", "### +++ ###", "#########"]
        .iter()
        .map(|s| s.parse::<Neighborhood>())
        .collect::<Result<_, _>>()?;
    let json = serde_json::to_string(&set)?;
    assert_eq!(json, "[0,455,511]");
    assert_eq!(serde_json::from_str::<NeighborhoodSet>(&json)?, set);
    assert!(serde_json::from_str::<NeighborhoodSet>("[512]").is_err());

    let config: Config = serde_json::from_str(r#"{"width": 16}"#)?;
    assert_eq!(config, Config::new(16, 8));
    assert_eq!(serde_json::to_string(&Side::NE)?, "\"NE\"");
    Ok(())
}
