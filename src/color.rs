use crate::{Error, Result};
use log::{Level, log};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A RGB color value.
///
/// Colors are plain values: copies are independent and equality compares all three channels.
/// There's no ordering between colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub red: u16,

    /// Green channel.
    pub green: u16,

    /// Blue channel.
    pub blue: u16,
}

/// One of the three channels of a [Color].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, index 0.
    Red,
    /// Green, index 1.
    Green,
    /// Blue, index 2.
    Blue,
}

impl Color {
    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_color::Color;
    /// let color = Color::new(1, 2, 3);
    /// assert_eq!(1, color.red);
    /// assert_eq!(2, color.green);
    /// assert_eq!(3, color.blue);
    /// ```
    pub fn new(red: u16, green: u16, blue: u16) -> Color {
        Color { red, green, blue }
    }

    /// Returns the red channel.
    pub fn red(&self) -> u16 {
        self.red
    }

    /// Sets the red channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_color::Color;
    /// let mut color = Color::default();
    /// color.set_red(65535);
    /// assert_eq!(65535, color.red());
    /// ```
    pub fn set_red(&mut self, red: u16) {
        self.red = red;
    }

    /// Returns the green channel.
    pub fn green(&self) -> u16 {
        self.green
    }

    /// Sets the green channel.
    pub fn set_green(&mut self, green: u16) {
        self.green = green;
    }

    /// Returns the blue channel.
    pub fn blue(&self) -> u16 {
        self.blue
    }

    /// Sets the blue channel.
    pub fn set_blue(&mut self, blue: u16) {
        self.blue = blue;
    }

    /// Returns the value of the channel at index `n`.
    ///
    /// Index 0 is red, 1 is green, and 2 is blue. Any other index returns
    /// [Error::IndexOutOfRange].
    ///
    /// # Examples
    ///
    /// ```
    /// use las_color::Color;
    /// let color = Color::new(1, 2, 3);
    /// assert_eq!(3, color.get(2).unwrap());
    /// assert!(color.get(3).is_err());
    /// ```
    pub fn get(&self, n: usize) -> Result<u16> {
        Channel::try_from(n).map(|channel| self[channel])
    }

    /// Returns a mutable reference to the channel at index `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_color::Color;
    /// let mut color = Color::new(1, 2, 3);
    /// *color.get_mut(0).unwrap() += 1;
    /// assert_eq!(2, color.red);
    /// assert!(color.get_mut(42).is_err());
    /// ```
    pub fn get_mut(&mut self, n: usize) -> Result<&mut u16> {
        let channel = Channel::try_from(n)?;
        Ok(&mut self[channel])
    }

    /// Sets the channel at index `n`.
    ///
    /// On error the color is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_color::Color;
    /// let mut color = Color::default();
    /// color.set(1, 128).unwrap();
    /// assert_eq!(Color::new(0, 128, 0), color);
    /// ```
    pub fn set(&mut self, n: usize, value: u16) -> Result<()> {
        *self.get_mut(n)? = value;
        Ok(())
    }

    /// Returns the value of a channel.
    pub fn channel(&self, channel: Channel) -> u16 {
        self[channel]
    }

    /// Sets the value of a channel.
    pub fn set_channel(&mut self, channel: Channel, value: u16) {
        self[channel] = value;
    }

    /// Iterates over the channels and their values, in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_color::{Channel, Color};
    /// let color = Color::new(1, 2, 3);
    /// let channels: Vec<_> = color.channels().collect();
    /// assert_eq!(
    ///     vec![(Channel::Red, 1), (Channel::Green, 2), (Channel::Blue, 3)],
    ///     channels
    /// );
    /// ```
    pub fn channels(&self) -> impl Iterator<Item = (Channel, u16)> {
        let color = *self;
        Channel::ALL
            .into_iter()
            .map(move |channel| (channel, color[channel]))
    }

    /// Returns the channels as `[red, green, blue]`.
    pub fn to_array(&self) -> [u16; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Index<Channel> for Color {
    type Output = u16;

    fn index(&self, channel: Channel) -> &u16 {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

impl IndexMut<Channel> for Color {
    fn index_mut(&mut self, channel: Channel) -> &mut u16 {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }
}

impl From<[u16; 3]> for Color {
    fn from([red, green, blue]: [u16; 3]) -> Color {
        Color::new(red, green, blue)
    }
}

impl From<(u16, u16, u16)> for Color {
    fn from((red, green, blue): (u16, u16, u16)) -> Color {
        Color::new(red, green, blue)
    }
}

impl From<Color> for [u16; 3] {
    fn from(color: Color) -> [u16; 3] {
        color.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl Channel {
    /// All channels, in index order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Returns this channel's index.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_color::Channel;
    /// assert_eq!(0, Channel::Red.index());
    /// assert_eq!(Channel::Blue, Channel::try_from(Channel::Blue.index()).unwrap());
    /// ```
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl TryFrom<usize> for Channel {
    type Error = Error;

    fn try_from(n: usize) -> Result<Channel> {
        match n {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            _ => {
                log!(Level::Debug, "color channel index {} is out of range", n);
                Err(Error::IndexOutOfRange { index: n })
            }
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}
