use las_color::{Channel, Color, Error};

#[test]
fn scenario() {
    let mut color = Color::new(255, 128, 0);
    assert_eq!(255, color.red());
    assert_eq!(128, color.green());
    assert_eq!(0, color.blue());
    color.set_green(64);
    assert_eq!(64, color.green());
    assert_eq!(Color::new(255, 64, 0), color);
}

#[test]
fn indexed_access_propagates_errors() {
    fn brighten(color: &mut Color, n: usize) -> las_color::Result<()> {
        let channel = color.get_mut(n)?;
        *channel = channel.saturating_add(1000);
        Ok(())
    }

    let mut color = Color::new(0, 65000, 0);
    brighten(&mut color, 1).unwrap();
    assert_eq!(65535, color.green);
    let err = brighten(&mut color, 3).unwrap_err();
    assert_eq!(Error::IndexOutOfRange { index: 3 }, err);
    assert_eq!("subscript out of range", err.to_string());
    assert_eq!(Color::new(0, 65535, 0), color);
}

#[test]
fn every_index_agrees_with_its_channel() {
    let mut color = Color::new(10, 20, 30);
    for channel in Channel::ALL {
        let n = channel.index();
        assert_eq!(color[channel], color.get(n).unwrap());
        color.set(n, 65535).unwrap();
        assert_eq!(65535, color.channel(channel));
    }
    assert_eq!(Color::new(65535, 65535, 65535), color);
}

#[test]
fn color_in_a_record() {
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct Record {
        intensity: u16,
        color: Option<Color>,
    }

    let first = Record {
        intensity: 42,
        color: Some(Color::new(1, 2, 3)),
    };
    let mut second = first;
    if let Some(color) = second.color.as_mut() {
        color.set_blue(4);
    }
    assert_eq!(Some(Color::new(1, 2, 3)), first.color);
    assert_eq!(Some(Color::new(1, 2, 4)), second.color);
    assert_eq!(first.intensity, second.intensity);
    assert_ne!(first, second);
}
